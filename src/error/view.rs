//! View-layer contract errors.

use thiserror::Error;

/// Errors raised by the leaderboard view state.
///
/// These are caller-contract violations and are surfaced immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A view was requested by a name that is neither global nor friends.
    #[error("Unknown leaderboard view '{value}' (expected 'global' or 'friends')")]
    InvalidViewSelector { value: String },
}

impl ViewError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewError::InvalidViewSelector { .. } => "E_VIEW_SELECTOR",
        }
    }
}
