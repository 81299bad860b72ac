//! CLI module for carbonboard.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version and help display
//! - Plain-text leaderboard output
//!
//! # Usage
//!
//! ```ignore
//! use carbonboard::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! let options = run_cli_command(command);
//! // options carry the flag overrides for the leaderboard
//! ```

pub mod args;
pub mod print;
pub mod version;

pub use args::{parse_args, usage, ArgsError, CliCommand, CliOptions};
pub use print::{fetch_plain, render_plain};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Run a CLI command if applicable.
///
/// `Version` and `Help` never return as they call `std::process::exit(0)`.
/// `Run` hands back the flag overrides.
pub fn run_cli_command(command: CliCommand) -> CliOptions {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run(options) => options,
    }
}
