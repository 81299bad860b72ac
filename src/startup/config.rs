//! Leaderboard client configuration.
//!
//! Values come from the environment first and are then overridden by
//! command-line flags.

use std::time::Duration;

use crate::cli::CliOptions;
use crate::error::{LeaderboardError, LeaderboardResult};
use crate::view_state::LeaderboardView;

/// Default leaderboard server.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

pub const ENV_SERVER_URL: &str = "CARBONBOARD_SERVER_URL";
pub const ENV_VIEWER_ID: &str = "CARBONBOARD_VIEWER_ID";
pub const ENV_VIEW: &str = "CARBONBOARD_VIEW";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "CARBONBOARD_REQUEST_TIMEOUT_SECS";

/// Configuration for the leaderboard client.
///
/// # Example
///
/// ```ignore
/// use carbonboard::startup::LeaderboardConfig;
///
/// let config = LeaderboardConfig::default()
///     .with_server_url("https://eco.example.com")
///     .with_viewer_id("user_123");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardConfig {
    /// Base URL of the record server
    pub server_url: String,
    /// Id of the viewing user, if known
    pub viewer_id: Option<String>,
    /// Leaderboard shown at startup
    pub initial_view: LeaderboardView,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Print the leaderboard to stdout instead of starting the TUI
    pub print_only: bool,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            viewer_id: None,
            initial_view: LeaderboardView::Global,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            print_only: false,
        }
    }
}

impl LeaderboardConfig {
    /// Create a new LeaderboardConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server URL.
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    /// Set the viewing user's id.
    pub fn with_viewer_id(mut self, id: impl Into<String>) -> Self {
        self.viewer_id = Some(id.into());
        self
    }

    /// Set the leaderboard shown at startup.
    pub fn with_initial_view(mut self, view: LeaderboardView) -> Self {
        self.initial_view = view;
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Enable print-only mode.
    pub fn with_print_only(mut self, print_only: bool) -> Self {
        self.print_only = print_only;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Load configuration from the process environment with command-line
    /// overrides applied.
    pub fn from_env(options: &CliOptions) -> LeaderboardResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), options)
    }

    /// Load configuration from an arbitrary key lookup with command-line
    /// overrides applied.
    ///
    /// Nothing is parsed until both layers are merged, so a bad environment
    /// value that a flag replaces is never reported.
    pub fn from_lookup<F>(lookup: F, options: &CliOptions) -> LeaderboardResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        RawConfig::from_lookup(lookup).with_args(options).build()
    }

    /// Check values that would only fail later at request time.
    pub fn validate(&self) -> LeaderboardResult<()> {
        self.check(ENV_SERVER_URL, ENV_REQUEST_TIMEOUT_SECS)
    }

    /// Like [`validate`](Self::validate), naming the keys the values came from.
    fn check(&self, url_key: &str, timeout_key: &str) -> LeaderboardResult<()> {
        let url = self.server_url.to_ascii_lowercase();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(LeaderboardError::Configuration {
                key: url_key.to_string(),
                message: format!("'{}' must start with http:// or https://", self.server_url),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(LeaderboardError::Configuration {
                key: timeout_key.to_string(),
                message: "timeout must be at least one second".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Raw layers
// ============================================================================

/// A raw value and the environment key or flag it was read from.
#[derive(Debug, Clone, PartialEq)]
struct Sourced {
    value: String,
    key: &'static str,
}

impl Sourced {
    fn new(value: impl Into<String>, key: &'static str) -> Self {
        Self {
            value: value.into(),
            key,
        }
    }
}

/// Unparsed settings. Later layers replace earlier ones; values are only
/// parsed and checked in [`RawConfig::build`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    server_url: Option<Sourced>,
    viewer_id: Option<String>,
    view: Option<Sourced>,
    timeout_secs: Option<Sourced>,
    print: bool,
}

impl RawConfig {
    /// Read the environment layer. Unset and empty values are skipped.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(|value| Sourced::new(value, key))
        };

        Self {
            server_url: get(ENV_SERVER_URL),
            viewer_id: get(ENV_VIEWER_ID).map(|id| id.value),
            view: get(ENV_VIEW),
            timeout_secs: get(ENV_REQUEST_TIMEOUT_SECS),
            print: false,
        }
    }

    /// Lay command-line flags over this layer.
    pub fn with_args(mut self, options: &CliOptions) -> Self {
        if let Some(ref url) = options.server_url {
            self.server_url = Some(Sourced::new(url.clone(), "--server"));
        }
        if let Some(ref id) = options.viewer_id {
            self.viewer_id = Some(id.clone());
        }
        if let Some(ref view) = options.view {
            self.view = Some(Sourced::new(view.clone(), "--view"));
        }
        if let Some(ref secs) = options.timeout_secs {
            self.timeout_secs = Some(Sourced::new(secs.clone(), "--timeout"));
        }
        self.print |= options.print;
        self
    }

    /// Parse the merged values and validate the result.
    pub fn build(self) -> LeaderboardResult<LeaderboardConfig> {
        let mut config = LeaderboardConfig::default().with_print_only(self.print);
        config.viewer_id = self.viewer_id;

        let mut url_key = ENV_SERVER_URL;
        if let Some(url) = self.server_url {
            url_key = url.key;
            config.server_url = url.value;
        }
        if let Some(view) = self.view {
            config.initial_view = view.value.parse()?;
        }
        let mut timeout_key = ENV_REQUEST_TIMEOUT_SECS;
        if let Some(secs) = self.timeout_secs {
            timeout_key = secs.key;
            config.request_timeout_secs = parse_timeout(secs.key, &secs.value)?;
        }

        config.check(url_key, timeout_key)?;
        Ok(config)
    }
}

fn parse_timeout(key: &str, value: &str) -> LeaderboardResult<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| LeaderboardError::Configuration {
            key: key.to_string(),
            message: format!("'{}' is not a number of seconds", value),
        })
}
