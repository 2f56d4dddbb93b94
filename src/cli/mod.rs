//! CLI module for algotrace.
//!
//! All CLI logic lives here rather than in main.rs so it can be tested:
//! argument parsing works over any string iterator and command handlers
//! return exit codes.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::run_cli;
pub use output::{print_help, print_list, print_step, print_version};
