//! Network-related error types.
//!
//! Errors raised while fetching the leaderboard from the record server.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed {
        url: String,
        message: String,
    },

    /// Request timed out.
    Timeout {
        operation: String,
        duration_secs: u64,
    },

    /// HTTP status error (non-2xx response).
    HttpStatus {
        status: u16,
        message: String,
    },

    /// The configured server URL cannot be used.
    InvalidUrl {
        url: String,
    },

    /// Generic network error.
    Other {
        message: String,
    },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { url, .. } => {
                format!("Unable to reach the leaderboard server at {}.", url)
            }
            NetworkError::Timeout {
                operation,
                duration_secs,
            } => {
                format!(
                    "The {} request timed out after {} seconds. The server may be slow or unreachable.",
                    operation, duration_secs
                )
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                404 => "The leaderboard endpoint was not found on the server.".to_string(),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                500..=599 => {
                    "The leaderboard server is experiencing issues. Please try again later."
                        .to_string()
                }
                _ => format!(
                    "The server returned an error (HTTP {}). Please try again.",
                    status
                ),
            },
            NetworkError::InvalidUrl { url } => {
                format!("'{}' is not a usable server URL.", url)
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }

    /// Build a `NetworkError` from a transport-level `HttpError`.
    ///
    /// `url` is the request URL, `timeout_secs` the client's configured timeout.
    pub fn from_http(err: HttpError, url: &str, timeout_secs: u64) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(_) => NetworkError::Timeout {
                operation: "leaderboard".to_string(),
                duration_secs: timeout_secs,
            },
            HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
                url: url.to_string(),
            },
            HttpError::Other(message) => NetworkError::Other { message },
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout {
                operation,
                duration_secs,
            } => {
                write!(f, "{} timed out after {} seconds", operation, duration_secs)
            }
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_is_retryable() {
        let err = NetworkError::ConnectionFailed {
            url: "http://localhost:3000".to_string(),
            message: "Connection refused".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_CONN");
        assert!(err.user_message().contains("http://localhost:3000"));
    }

    #[test]
    fn test_http_status_retryable_for_server_errors() {
        for status in [500, 503, 429, 408] {
            let err = NetworkError::HttpStatus {
                status,
                message: String::new(),
            };
            assert!(err.is_retryable(), "status {} should be retryable", status);
        }
    }

    #[test]
    fn test_http_status_not_retryable_for_client_errors() {
        for status in [400, 401, 404] {
            let err = NetworkError::HttpStatus {
                status,
                message: String::new(),
            };
            assert!(!err.is_retryable(), "status {} should not be retryable", status);
        }
    }

    #[test]
    fn test_from_http_maps_variants() {
        let url = "http://example.com/user/leaderboard";

        assert!(matches!(
            NetworkError::from_http(HttpError::ConnectionFailed("refused".into()), url, 15),
            NetworkError::ConnectionFailed { .. }
        ));
        assert_eq!(
            NetworkError::from_http(HttpError::Timeout("slow".into()), url, 15),
            NetworkError::Timeout {
                operation: "leaderboard".to_string(),
                duration_secs: 15,
            }
        );
        assert_eq!(
            NetworkError::from_http(HttpError::InvalidUrl("bad".into()), url, 15),
            NetworkError::InvalidUrl {
                url: url.to_string(),
            }
        );
        assert_eq!(
            NetworkError::from_http(HttpError::Other("reset".into()), url, 15),
            NetworkError::Other {
                message: "reset".to_string(),
            }
        );
    }

    #[test]
    fn test_display() {
        let err = NetworkError::HttpStatus {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 error: Not Found");
    }
}
