//! Unified error handling for the leaderboard client.
//!
//! - **Error Categories**: High-level classification for handling decisions
//! - **Domain-specific Errors**: Network, Decode and View errors
//! - **Unified Error Type**: `LeaderboardError` consolidates all error types
//! - **Error Context**: Operation and endpoint attached to errors
//! - **Result Type Alias**: `LeaderboardResult<T>`
//!
//! Malformed emission values are not errors: they are absorbed per record by
//! the ranking engine and never reach this module.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout, 4xx | Yes (mostly) |
//! | Server | 5xx, unreadable payload | Yes |
//! | Client | Contract violations | No |
//! | Configuration | Bad URL or settings | No |

mod category;
mod context;
mod decode;
mod leaderboard_error;
mod network;
mod result;
mod view;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use decode::DecodeError;
pub use leaderboard_error::LeaderboardError;
pub use network::NetworkError;
pub use result::{LeaderboardResult, ResultExt};
pub use view::ViewError;
