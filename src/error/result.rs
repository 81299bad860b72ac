//! Result type alias for leaderboard operations.

use super::context::ErrorContext;
use super::leaderboard_error::LeaderboardError;

/// Type alias for Results using LeaderboardError.
pub type LeaderboardResult<T> = Result<T, LeaderboardError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    fn context(self, ctx: ErrorContext) -> LeaderboardResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> LeaderboardResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<LeaderboardError>,
{
    fn context(self, ctx: ErrorContext) -> LeaderboardResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> LeaderboardResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, NetworkError};

    #[test]
    fn test_context_on_ok_is_noop() {
        let result: Result<i32, NetworkError> = Ok(42);
        assert_eq!(result.context(ErrorContext::new("op")).unwrap(), 42);
    }

    #[test]
    fn test_context_on_domain_error() {
        let result: Result<(), DecodeError> = Err(DecodeError::MissingId { index: 2 });
        let err = result.context(ErrorContext::new("decode")).unwrap_err();
        assert_eq!(err.context().unwrap().operation, "decode");
        assert_eq!(err.error_code(), "E_DECODE_ID");
    }

    #[test]
    fn test_with_context_is_lazy() {
        let mut called = false;
        let result: Result<i32, NetworkError> = Ok(1);
        let _ = result.with_context(|| {
            called = true;
            ErrorContext::new("never")
        });
        assert!(!called);
    }
}
