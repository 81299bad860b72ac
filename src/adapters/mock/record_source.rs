//! In-memory record source for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::{LeaderboardError, LeaderboardResult, NetworkError};
use crate::models::UserRecord;
use crate::traits::RecordSource;

/// Record source that serves queued results in order.
///
/// Once the queue is down to one result, that result is repeated for every
/// further fetch.
#[derive(Debug, Clone, Default)]
pub struct StaticRecordSource {
    results: Arc<Mutex<VecDeque<Result<Vec<UserRecord>, String>>>>,
    fetch_count: Arc<Mutex<usize>>,
}

impl StaticRecordSource {
    /// A source that always returns `records`.
    pub fn new(records: Vec<UserRecord>) -> Self {
        let source = Self::default();
        source.push_records(records);
        source
    }

    /// Queue a successful batch.
    pub fn push_records(&self, records: Vec<UserRecord>) {
        self.results.lock().unwrap().push_back(Ok(records));
    }

    /// Queue a failed fetch.
    pub fn push_failure(&self, message: impl Into<String>) {
        self.results.lock().unwrap().push_back(Err(message.into()));
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        *self.fetch_count.lock().unwrap()
    }
}

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn fetch_records(&self) -> LeaderboardResult<Vec<UserRecord>> {
        *self.fetch_count.lock().unwrap() += 1;

        let mut results = self.results.lock().unwrap();
        let next = if results.len() > 1 {
            results.pop_front()
        } else {
            results.front().cloned()
        };

        match next {
            Some(Ok(records)) => Ok(records),
            Some(Err(message)) => Err(NetworkError::Other { message }.into()),
            None => Err(LeaderboardError::Configuration {
                key: "record_source".to_string(),
                message: "no records queued".to_string(),
            }),
        }
    }

    fn describe(&self) -> String {
        "static records".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_repeats_last_result() {
        let source = StaticRecordSource::new(vec![UserRecord::new("1", "A", "1", false)]);

        assert_eq!(source.fetch_records().await.unwrap().len(), 1);
        assert_eq!(source.fetch_records().await.unwrap().len(), 1);
        assert_eq!(source.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_serves_queue_in_order() {
        let source = StaticRecordSource::default();
        source.push_failure("offline");
        source.push_records(vec![]);

        assert!(source.fetch_records().await.is_err());
        assert!(source.fetch_records().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_queue_is_error() {
        let source = StaticRecordSource::default();
        assert!(source.fetch_records().await.is_err());
    }
}
