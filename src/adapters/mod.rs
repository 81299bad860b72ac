//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`HttpRecordSource`] - Leaderboard records fetched from the server
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::StaticRecordSource`] - Queued record batches

pub mod http_record_source;
pub mod mock;
pub mod reqwest_http;

pub use http_record_source::{HttpRecordSource, LEADERBOARD_PATH};
pub use mock::{MockHttpClient, StaticRecordSource};
pub use reqwest_http::ReqwestHttpClient;
