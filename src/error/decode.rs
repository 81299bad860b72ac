//! Errors raised while validating a leaderboard payload.

use thiserror::Error;

/// Failure to turn a server payload into typed user records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// Body is not a leaderboard payload (bad JSON, missing `users`).
    #[error("Invalid leaderboard payload: {message}")]
    InvalidPayload { message: String },

    /// A single record is not a JSON object.
    #[error("Record at index {index} is unreadable: {message}")]
    InvalidRecord { index: usize, message: String },

    /// A single record carried no usable identifier.
    #[error("Record at index {index} has no id")]
    MissingId { index: usize },
}

impl DecodeError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            DecodeError::InvalidPayload { .. } => {
                "The server sent a leaderboard the client could not read.".to_string()
            }
            DecodeError::InvalidRecord { index, .. } => {
                format!("Leaderboard entry #{} could not be read.", index + 1)
            }
            DecodeError::MissingId { index } => {
                format!("Leaderboard entry #{} is missing its id.", index + 1)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DecodeError::InvalidPayload { .. } => "E_DECODE_PAYLOAD",
            DecodeError::InvalidRecord { .. } => "E_DECODE_RECORD",
            DecodeError::MissingId { .. } => "E_DECODE_ID",
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::InvalidPayload {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let decode: DecodeError = err.into();
        assert!(matches!(decode, DecodeError::InvalidPayload { .. }));
        assert_eq!(decode.error_code(), "E_DECODE_PAYLOAD");
    }

    #[test]
    fn test_missing_id_message_is_one_based() {
        let err = DecodeError::MissingId { index: 0 };
        assert!(err.user_message().contains("#1"));
        assert_eq!(err.to_string(), "Record at index 0 has no id");
    }
}
