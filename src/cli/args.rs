//! Command-line argument parsing for carbonboard.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use thiserror::Error;

/// Flag overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    /// `--server <url>`
    pub server_url: Option<String>,
    /// `--viewer <id>`
    pub viewer_id: Option<String>,
    /// `--view <global|friends>`, validated when applied to the config
    pub view: Option<String>,
    /// `--timeout <secs>`, validated when applied to the config
    pub timeout_secs: Option<String>,
    /// `--print`
    pub print: bool,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Show the leaderboard (TUI or plain text)
    Run(CliOptions),
}

/// Usage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    #[error("unknown argument '{arg}'")]
    UnknownArgument { arg: String },
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win as soon as they are seen.
///
/// # Examples
///
/// ```
/// use carbonboard::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["carbonboard".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        let slot = match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--print" => {
                options.print = true;
                continue;
            }
            "--server" => &mut options.server_url,
            "--viewer" => &mut options.viewer_id,
            "--view" => &mut options.view,
            "--timeout" => &mut options.timeout_secs,
            _ => return Err(ArgsError::UnknownArgument { arg }),
        };

        let value = match inline_value {
            Some(value) => value,
            None => args
                .next()
                .filter(|value| !value.starts_with("--"))
                .ok_or_else(|| ArgsError::MissingValue { flag: flag.clone() })?,
        };
        if value.is_empty() {
            return Err(ArgsError::MissingValue { flag });
        }
        *slot = Some(value);
    }

    Ok(CliCommand::Run(options))
}

/// Usage text for `--help`.
pub fn usage() -> String {
    format!(
        "carbonboard {}\n\
         Carbon-emission leaderboard for the terminal.\n\n\
         USAGE:\n    carbonboard [OPTIONS]\n\n\
         OPTIONS:\n\
         \x20   --server <url>      Leaderboard server (env CARBONBOARD_SERVER_URL)\n\
         \x20   --viewer <id>       Your user id (env CARBONBOARD_VIEWER_ID)\n\
         \x20   --view <name>       global or friends (env CARBONBOARD_VIEW)\n\
         \x20   --timeout <secs>    Request timeout (env CARBONBOARD_REQUEST_TIMEOUT_SECS)\n\
         \x20   --print             Print the leaderboard and exit\n\
         \x20   -V, --version       Print version\n\
         \x20   -h, --help          Print this help\n",
        super::VERSION
    )
}
