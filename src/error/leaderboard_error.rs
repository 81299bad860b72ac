//! Unified error type for the leaderboard client.
//!
//! `LeaderboardError` wraps every domain error so callers get consistent
//! categorization, retry decisions and user messaging.

use std::fmt;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::decode::DecodeError;
use super::network::NetworkError;
use super::view::ViewError;

/// Unified error type for the leaderboard client.
#[derive(Debug)]
pub enum LeaderboardError {
    /// Fetching records from the server failed.
    Network(NetworkError),

    /// The server payload could not be validated.
    Decode(DecodeError),

    /// A view-layer contract violation.
    View(ViewError),

    /// Invalid configuration value.
    Configuration { key: String, message: String },

    /// Wrapped error with additional context.
    WithContext {
        error: Box<LeaderboardError>,
        context: ErrorContext,
    },
}

impl LeaderboardError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            LeaderboardError::Network(NetworkError::HttpStatus { status, .. })
                if *status >= 500 =>
            {
                ErrorCategory::Server
            }
            LeaderboardError::Network(NetworkError::InvalidUrl { .. }) => {
                ErrorCategory::Configuration
            }
            LeaderboardError::Network(_) => ErrorCategory::Network,
            LeaderboardError::Decode(_) => ErrorCategory::Server,
            LeaderboardError::View(_) => ErrorCategory::Client,
            LeaderboardError::Configuration { .. } => ErrorCategory::Configuration,
            LeaderboardError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            LeaderboardError::Network(err) => err.is_retryable(),
            LeaderboardError::Decode(_) => false,
            LeaderboardError::View(_) => false,
            LeaderboardError::Configuration { .. } => false,
            LeaderboardError::WithContext { error, .. } => error.is_retryable(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            LeaderboardError::Network(err) => err.user_message(),
            LeaderboardError::Decode(err) => err.user_message(),
            LeaderboardError::View(err) => err.user_message(),
            LeaderboardError::Configuration { key, message } => {
                format!("Invalid value for {}: {}", key, message)
            }
            LeaderboardError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            LeaderboardError::Network(err) => err.error_code(),
            LeaderboardError::Decode(err) => err.error_code(),
            LeaderboardError::View(err) => err.error_code(),
            LeaderboardError::Configuration { .. } => "E_CONFIG",
            LeaderboardError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        LeaderboardError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            LeaderboardError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &LeaderboardError {
        match self {
            LeaderboardError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl fmt::Display for LeaderboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardError::Network(err) => write!(f, "{}", err),
            LeaderboardError::Decode(err) => write!(f, "{}", err),
            LeaderboardError::View(err) => write!(f, "{}", err),
            LeaderboardError::Configuration { key, message } => {
                write!(f, "Configuration error ({}): {}", key, message)
            }
            LeaderboardError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for LeaderboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeaderboardError::Network(err) => Some(err),
            LeaderboardError::Decode(err) => Some(err),
            LeaderboardError::View(err) => Some(err),
            LeaderboardError::Configuration { .. } => None,
            LeaderboardError::WithContext { error, .. } => error.source(),
        }
    }
}

impl From<NetworkError> for LeaderboardError {
    fn from(err: NetworkError) -> Self {
        LeaderboardError::Network(err)
    }
}

impl From<DecodeError> for LeaderboardError {
    fn from(err: DecodeError) -> Self {
        LeaderboardError::Decode(err)
    }
}

impl From<ViewError> for LeaderboardError {
    fn from(err: ViewError) -> Self {
        LeaderboardError::View(err)
    }
}

impl From<serde_json::Error> for LeaderboardError {
    fn from(err: serde_json::Error) -> Self {
        LeaderboardError::Decode(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_status_is_server_category() {
        let err: LeaderboardError = NetworkError::HttpStatus {
            status: 503,
            message: "unavailable".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Server);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_client_status_is_network_category() {
        let err: LeaderboardError = NetworkError::HttpStatus {
            status: 404,
            message: "missing".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_view_error_is_client_category() {
        let err: LeaderboardError = ViewError::InvalidViewSelector {
            value: "weekly".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Client);
        assert_eq!(err.error_code(), "E_VIEW_SELECTOR");
        assert!(err.user_message().contains("weekly"));
    }

    #[test]
    fn test_invalid_url_is_configuration() {
        let err: LeaderboardError = NetworkError::InvalidUrl {
            url: "not a url".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_context_wrapping_preserves_properties() {
        let err: LeaderboardError = NetworkError::Timeout {
            operation: "leaderboard".to_string(),
            duration_secs: 15,
        }
        .into();
        let wrapped = err.with_context(ErrorContext::new("fetch_records"));

        assert_eq!(wrapped.category(), ErrorCategory::Network);
        assert!(wrapped.is_retryable());
        assert_eq!(wrapped.error_code(), "E_NET_TIMEOUT");
        assert_eq!(wrapped.context().unwrap().operation, "fetch_records");
        assert!(matches!(wrapped.inner(), LeaderboardError::Network(_)));
        assert!(wrapped.to_string().contains("[fetch_records]"));
    }

    #[test]
    fn test_json_error_converts_to_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err: LeaderboardError = json_err.into();
        assert!(matches!(err, LeaderboardError::Decode(_)));
        assert_eq!(err.category(), ErrorCategory::Server);
    }
}
