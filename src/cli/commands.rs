//! CLI command handlers.
//!
//! Execution logic for each CLI command. The fallible core of `run` is
//! split out as a `TraceResult`-returning function so tests can assert on
//! outcomes; the `ExitCode` mapping stays in the dispatch layer.

use std::path::Path;
use std::process::ExitCode;

use super::output::{print_help, print_list, print_step, print_version};
use super::{Args, Command};
use crate::config::RunConfig;
use crate::error::TraceResult;
use crate::export::{ExportFormat, Exporter};
use crate::playback::TraceStore;

/// Main CLI entry point: dispatch on the parsed command.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            config_path,
            verbose,
            export_path,
            json,
        } => match run_trace(&config_path, verbose, export_path.as_deref(), json) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        Command::List => {
            print_list();
            ExitCode::SUCCESS
        }
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Generate a trace from a YAML run configuration and play it through,
/// printing every step.
///
/// # Errors
///
/// Returns error if the configuration cannot be loaded, is invalid, or the
/// export fails.
pub fn run_trace(
    config_path: &Path,
    verbose: bool,
    export_path: Option<&Path>,
    json: bool,
) -> TraceResult<()> {
    let config = RunConfig::load(config_path)?;
    let trace = config.run()?;

    // Empty input: the start action no-ops rather than loading the store.
    if trace.is_empty() {
        println!("Nothing to trace: input is empty.");
        return Ok(());
    }

    if let Some(path) = export_path {
        let format = if json {
            ExportFormat::Json
        } else {
            ExportFormat::JsonLines
        };
        Exporter::with_format(format).export_to_path(&trace, path)?;
        println!("Exported {} steps to {}", trace.len(), path.display());
    }

    println!(
        "{} ({}), {} values, {} steps\n",
        config.algorithm,
        config.algorithm.family(),
        config.values.len(),
        trace.len()
    );

    let mut store = TraceStore::new();
    store.load(trace, config.algorithm)?;

    let total = store.len();
    loop {
        if let (Some(index), Some(step)) = (store.current_index(), store.current_step()) {
            print_step(index, total, step, verbose);
        }
        if store.at_end() {
            break;
        }
        store.advance();
    }

    Ok(())
}
