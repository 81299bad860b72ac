//! Render context for the leaderboard screen.

use crate::app::{App, LoadStatus};
use crate::view_state::LeaderboardViewState;

/// Borrowed view of everything the leaderboard renderers read.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub view_state: &'a LeaderboardViewState,
    /// Highlighted row in the displayed sequence
    pub cursor: usize,
    pub status: &'a LoadStatus,
}

impl<'a> RenderContext<'a> {
    pub fn new(view_state: &'a LeaderboardViewState, cursor: usize, status: &'a LoadStatus) -> Self {
        Self {
            view_state,
            cursor,
            status,
        }
    }

    pub fn from_app(app: &'a App) -> Self {
        Self::new(&app.view_state, app.cursor, &app.load_status)
    }

    /// Whether `id` belongs to the viewing user.
    pub fn is_viewer(&self, id: &str) -> bool {
        self.view_state
            .viewer()
            .map(|viewer| viewer.id == id)
            .unwrap_or(false)
    }
}
