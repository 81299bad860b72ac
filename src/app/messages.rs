//! AppMessage enum for async communication within the application.

use crate::error::LeaderboardError;
use crate::models::UserRecord;

/// Messages received from background tasks.
#[derive(Debug)]
pub enum AppMessage {
    /// A fetch finished. `request_id` identifies which refresh produced it.
    RecordsLoaded {
        request_id: u64,
        result: Result<Vec<UserRecord>, LeaderboardError>,
    },
}
