//! CLI output formatting.
//!
//! All terminal formatting for the CLI lives here, extracted so the
//! renderable text can be generated and inspected in tests.

use crate::trace::{Snapshot, Step};

/// Print version information.
pub fn print_version() {
    println!("algotrace {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"algotrace - step-trace engine for classic algorithm visualization

USAGE:
    algotrace <COMMAND> [OPTIONS]

COMMANDS:
    run <run.yaml>          Generate a trace and print every step
        -v, --verbose       Also print role indices and counters
        --export <path>     Write the trace to a file
        --json              Export one pretty JSON document instead of JSON Lines

    list                    List the supported algorithms

    help                    Show this help message
    version                 Show version information

EXAMPLES:
    algotrace run runs/bubble.yaml
    algotrace run runs/hash.yaml --verbose --export trace.jsonl
"
    );
}

/// Print the supported algorithms, grouped by family.
pub fn print_list() {
    use crate::trace::Algorithm;

    println!("Supported algorithms:");
    for algorithm in Algorithm::ALL {
        println!("  {:<16} ({})", algorithm.to_string(), algorithm.family());
    }
}

/// Print one playback step.
pub fn print_step(index: usize, total: usize, step: &Step, verbose: bool) {
    println!(
        "[{:>3}/{total}] {:<14} {}",
        index + 1,
        step.kind.to_string(),
        step.description
    );

    if verbose {
        println!("        state:    {}", format_snapshot(&step.state));
        for (role, positions) in &step.roles {
            let list: Vec<String> = positions.iter().map(ToString::to_string).collect();
            println!("        {:<8} {{{}}}", format!("{role}:"), list.join(", "));
        }
        println!("        counters: {}", step.counters);
    }
}

/// Render a snapshot on one line.
#[must_use]
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    match snapshot {
        Snapshot::Array(values) => {
            let items: Vec<String> = values.iter().map(ToString::to_string).collect();
            format!("[{}]", items.join(", "))
        }
        Snapshot::Buckets(buckets) => {
            let items: Vec<String> = buckets
                .iter()
                .enumerate()
                .map(|(i, bucket)| match bucket {
                    crate::trace::Bucket::Chain(keys) => {
                        let chain: Vec<String> = keys.iter().map(ToString::to_string).collect();
                        format!("{i}:[{}]", chain.join(", "))
                    }
                    crate::trace::Bucket::Slot(Some(key)) => format!("{i}:{key}"),
                    crate::trace::Bucket::Slot(None) => format!("{i}:_"),
                })
                .collect();
            format!("{{{}}}", items.join(" "))
        }
    }
}
