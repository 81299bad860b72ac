//! Record source trait abstraction.
//!
//! The ranking engine never fetches anything itself; a `RecordSource` hands it
//! a validated batch of user records.

use async_trait::async_trait;

use crate::error::LeaderboardResult;
use crate::models::UserRecord;

/// Supplier of leaderboard records.
///
/// One call is one fetch. Implementations do not retry or cache; the caller
/// decides when to fetch again.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the current record batch, in server order.
    async fn fetch_records(&self) -> LeaderboardResult<Vec<UserRecord>>;

    /// Human-readable description of where records come from.
    fn describe(&self) -> String;
}
