//! CLI module
//!
//! Provides command-line interface for:
//! - init: write a default configuration file
//! - serve: answer line-delimited JSON requests on stdin/stdout

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, run_command, serve};
pub use errors::{CliError, CliResult};
pub use io::serve_lines;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}
