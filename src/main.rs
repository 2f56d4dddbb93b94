//! algotrace CLI - step-trace engine for classic algorithm visualization.

use std::process::ExitCode;

use algotrace::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
