//! Ranking engine: user records in, ranked leaderboards out.
//!
//! [`compute_rankings`] is pure. It borrows the records, allocates fresh
//! output on every call and never fails: a record whose emission text does not
//! parse is ranked last in each sequence it belongs to instead of aborting the
//! batch.

use serde::Serialize;

use super::emission::Emission;
use crate::models::UserRecord;

/// Number of entries shown on the podium.
pub const PODIUM_SIZE: usize = 3;

/// Podium position of a top-3 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 1-based rank, if it is on the podium.
    pub fn for_rank(rank: u32) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Medal::Gold => "👑",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }
}

/// One row of a ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// 1-based dense position within its own sequence.
    pub rank: u32,
    pub id: String,
    pub display_name: String,
    pub avatar_ref: Option<String>,
    pub carbon_emission: Emission,
}

impl RankedEntry {
    pub fn medal(&self) -> Option<Medal> {
        Medal::for_rank(self.rank)
    }
}

/// Both leaderboards derived from one record batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Rankings {
    /// Every record, ranked.
    pub global: Vec<RankedEntry>,
    /// Friend records only, ranked independently from 1.
    pub friends: Vec<RankedEntry>,
}

impl Rankings {
    pub fn is_empty(&self) -> bool {
        self.global.is_empty()
    }

    /// Find the global entry for a record id.
    pub fn find_global(&self, id: &str) -> Option<&RankedEntry> {
        find_by_id(&self.global, id)
    }

    /// Find the friends entry for a record id.
    pub fn find_friend(&self, id: &str) -> Option<&RankedEntry> {
        find_by_id(&self.friends, id)
    }
}

/// Compute the global and friends leaderboards.
///
/// Both sequences are sorted ascending by parsed emission with input order as
/// the tie-break, and carry dense ranks `1..n`. The friends sequence is built
/// from the original input order, not from the global result.
pub fn compute_rankings(records: &[UserRecord]) -> Rankings {
    let global = rank_records(records.iter());
    let friends = rank_records(records.iter().filter(|record| record.is_friend));

    tracing::debug!(
        "Computed rankings: {} global, {} friends",
        global.len(),
        friends.len()
    );

    Rankings { global, friends }
}

/// Rank an ordered sequence of records.
///
/// The iteration order of `records` is the tie-break order.
pub fn rank_records<'a, I>(records: I) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = &'a UserRecord>,
{
    let mut parsed: Vec<(Emission, &UserRecord)> = records
        .into_iter()
        .map(|record| {
            let emission = Emission::parse(&record.carbon_emission);
            if !emission.is_valid() {
                tracing::warn!(
                    "Record {} has unparseable emission {:?}; ranking it last",
                    record.id,
                    record.carbon_emission
                );
            }
            (emission, record)
        })
        .collect();

    // `sort_by` is stable, which is what keeps ties in input order.
    parsed.sort_by(|(a, _), (b, _)| a.ranking_cmp(b));

    parsed
        .into_iter()
        .zip(1u32..)
        .map(|((emission, record), rank)| RankedEntry {
            rank,
            id: record.id.clone(),
            display_name: record.display_name.clone(),
            avatar_ref: record.avatar_ref.clone(),
            carbon_emission: emission,
        })
        .collect()
}

/// The top entries of a ranked sequence, at most [`PODIUM_SIZE`].
pub fn podium(entries: &[RankedEntry]) -> &[RankedEntry] {
    &entries[..entries.len().min(PODIUM_SIZE)]
}

/// Look up an entry by record id.
pub fn find_by_id<'a>(entries: &'a [RankedEntry], id: &str) -> Option<&'a RankedEntry> {
    entries.iter().find(|entry| entry.id == id)
}
