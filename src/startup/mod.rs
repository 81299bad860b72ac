//! Startup configuration.
//!
//! # Usage
//!
//! ```ignore
//! use carbonboard::startup::LeaderboardConfig;
//!
//! let config = LeaderboardConfig::from_env(&options)?;
//! ```

pub mod config;

pub use config::{
    LeaderboardConfig, RawConfig, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SERVER_URL, ENV_REQUEST_TIMEOUT_SECS,
    ENV_SERVER_URL, ENV_VIEW, ENV_VIEWER_ID,
};
