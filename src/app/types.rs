//! Supporting types for the App.

use chrono::{DateTime, Local};

/// Outcome of the most recent fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// Rankings reflect the batch fetched at `fetched_at`
    Loaded {
        fetched_at: DateTime<Local>,
        record_count: usize,
    },
    /// The last fetch failed; earlier rankings, if any, are still shown
    Failed { message: String },
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    /// One-line description for the status bar.
    pub fn status_line(&self) -> String {
        match self {
            LoadStatus::Idle => String::new(),
            LoadStatus::Loading => "Loading leaderboard...".to_string(),
            LoadStatus::Loaded {
                fetched_at,
                record_count,
            } => format!(
                "{} players, updated {}",
                record_count,
                fetched_at.format("%H:%M:%S")
            ),
            LoadStatus::Failed { message } => message.clone(),
        }
    }
}
