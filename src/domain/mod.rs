//! Leaderboard domain logic.
//!
//! - [`Emission`] - Parsed carbon-emission value with the unrankable sentinel
//! - [`compute_rankings`] - Pure record batch -> global and friends leaderboards
//! - [`RankedEntry`] / [`Rankings`] - Ranked output consumed by the view layer

pub mod emission;
pub mod ranking;

pub use emission::Emission;
pub use ranking::{
    compute_rankings, find_by_id, podium, rank_records, Medal, RankedEntry, Rankings,
    PODIUM_SIZE,
};
