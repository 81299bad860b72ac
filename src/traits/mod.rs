//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations
//! - [`RecordSource`] - Supplier of leaderboard records

pub mod http;
pub mod record_source;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use record_source::RecordSource;
