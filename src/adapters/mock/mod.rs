//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`StaticRecordSource`] - Record source serving queued batches

pub mod http;
pub mod record_source;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use record_source::StaticRecordSource;
