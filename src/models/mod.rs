//! Leaderboard records and the viewing user.

pub mod user;
mod viewer;

pub use user::{
    decode_records, DecodedRecords, LeaderboardPayload, RawUserRecord, TextOrNumber, UserRecord,
};
pub use viewer::Viewer;
