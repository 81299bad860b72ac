//! Leaderboard view state
//!
//! Tracks which leaderboard is on screen and which entry is open in the detail
//! overlay. The displayed sequence is always read from the rankings currently
//! held, so a refresh is visible on the next access.
//!
//! The state has a single owner and no internal locking; every mutation goes
//! through `&mut self`.

use std::fmt;
use std::str::FromStr;

use crate::domain::{find_by_id, podium, RankedEntry, Rankings};
use crate::error::ViewError;
use crate::models::Viewer;

// ============================================================================
// LeaderboardView
// ============================================================================

/// Which ranked sequence is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderboardView {
    /// Every user, ranked
    #[default]
    Global,
    /// Only the viewer's friends, ranked among themselves
    Friends,
}

impl LeaderboardView {
    /// Get the display name for this view
    pub fn display_name(&self) -> &'static str {
        match self {
            LeaderboardView::Global => "Global Leaderboard",
            LeaderboardView::Friends => "Friends Leaderboard",
        }
    }

    /// Short identifier used on the command line and in config
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardView::Global => "global",
            LeaderboardView::Friends => "friends",
        }
    }

    /// The other view
    pub fn toggled(&self) -> Self {
        match self {
            LeaderboardView::Global => LeaderboardView::Friends,
            LeaderboardView::Friends => LeaderboardView::Global,
        }
    }
}

impl fmt::Display for LeaderboardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LeaderboardView {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" | "app-wide" | "appwide" => Ok(LeaderboardView::Global),
            "friends" => Ok(LeaderboardView::Friends),
            _ => Err(ViewError::InvalidViewSelector {
                value: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// LeaderboardViewState
// ============================================================================

/// What the leaderboard screen is showing.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardViewState {
    rankings: Rankings,
    active_view: LeaderboardView,
    selected: Option<RankedEntry>,
    viewer: Option<Viewer>,
}

impl LeaderboardViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the viewing user
    pub fn with_viewer(mut self, viewer: Viewer) -> Self {
        self.viewer = Some(viewer);
        self
    }

    /// Builder-style setter for the initial view
    pub fn with_view(mut self, view: LeaderboardView) -> Self {
        self.active_view = view;
        self
    }

    // ------------------------------------------------------------------------
    // Rankings
    // ------------------------------------------------------------------------

    /// Replace the rankings after a refresh.
    ///
    /// The previous sequences are dropped whole. `selected` is an owned copy
    /// and is only cleared by [`clear_selection`](Self::clear_selection).
    pub fn set_rankings(&mut self, rankings: Rankings) {
        self.rankings = rankings;
    }

    pub fn rankings(&self) -> &Rankings {
        &self.rankings
    }

    pub fn set_viewer(&mut self, viewer: Option<Viewer>) {
        self.viewer = viewer;
    }

    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }

    // ------------------------------------------------------------------------
    // View selection
    // ------------------------------------------------------------------------

    pub fn active_view(&self) -> LeaderboardView {
        self.active_view
    }

    /// Switch the displayed leaderboard. Selection is untouched.
    pub fn select_view(&mut self, view: LeaderboardView) {
        if self.active_view != view {
            tracing::debug!("Leaderboard view: {} -> {}", self.active_view, view);
        }
        self.active_view = view;
    }

    /// Switch the displayed leaderboard by name.
    ///
    /// Fails fast with [`ViewError::InvalidViewSelector`] for any name that is
    /// not a known view; the state is left unchanged in that case.
    pub fn select_view_named(&mut self, name: &str) -> Result<(), ViewError> {
        let view = name.parse::<LeaderboardView>()?;
        self.select_view(view);
        Ok(())
    }

    pub fn toggle_view(&mut self) {
        self.select_view(self.active_view.toggled());
    }

    /// The ranked sequence for the active view.
    pub fn displayed_sequence(&self) -> &[RankedEntry] {
        match self.active_view {
            LeaderboardView::Global => &self.rankings.global,
            LeaderboardView::Friends => &self.rankings.friends,
        }
    }

    /// Top entries of the displayed sequence.
    pub fn podium(&self) -> &[RankedEntry] {
        podium(self.displayed_sequence())
    }

    // ------------------------------------------------------------------------
    // Entry selection
    // ------------------------------------------------------------------------

    /// Open an entry in the detail view.
    pub fn select_entry(&mut self, entry: RankedEntry) {
        tracing::debug!("Selected leaderboard entry {} (rank {})", entry.id, entry.rank);
        self.selected = Some(entry);
    }

    /// Dismiss the detail view.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&RankedEntry> {
        self.selected.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    // ------------------------------------------------------------------------
    // Viewer lookups
    // ------------------------------------------------------------------------

    /// The viewer's own row in the displayed sequence, if present.
    pub fn viewer_entry(&self) -> Option<&RankedEntry> {
        let viewer = self.viewer.as_ref()?;
        find_by_id(self.displayed_sequence(), &viewer.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compute_rankings;
    use crate::models::UserRecord;

    fn sample_state() -> LeaderboardViewState {
        let records = vec![
            UserRecord::new("1", "One", "5.0", true),
            UserRecord::new("2", "Two", "2.0", false),
            UserRecord::new("3", "Three", "2.0", true),
        ];
        let mut state = LeaderboardViewState::new();
        state.set_rankings(compute_rankings(&records));
        state
    }

    fn ids(entries: &[RankedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_default_view_is_global() {
        let state = sample_state();
        assert_eq!(state.active_view(), LeaderboardView::Global);
        assert_eq!(ids(state.displayed_sequence()), vec!["2", "3", "1"]);
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_select_view_switches_sequence() {
        let mut state = sample_state();

        state.select_view(LeaderboardView::Friends);
        assert_eq!(ids(state.displayed_sequence()), vec!["3", "1"]);

        state.select_view(LeaderboardView::Global);
        assert_eq!(ids(state.displayed_sequence()), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_select_view_keeps_selection() {
        let mut state = sample_state();
        let entry = state.displayed_sequence()[0].clone();
        state.select_entry(entry.clone());

        state.select_view(LeaderboardView::Friends);
        assert_eq!(state.selected(), Some(&entry));

        state.select_view(LeaderboardView::Global);
        assert_eq!(state.selected(), Some(&entry));
    }

    #[test]
    fn test_selection_does_not_affect_displayed_sequence() {
        let mut state = sample_state();
        let before: Vec<RankedEntry> = state.displayed_sequence().to_vec();

        state.select_entry(before[2].clone());
        assert_eq!(state.displayed_sequence(), before.as_slice());

        state.clear_selection();
        assert!(state.selected().is_none());
        assert!(!state.has_selection());
        assert_eq!(state.displayed_sequence(), before.as_slice());
    }

    #[test]
    fn test_select_view_named() {
        let mut state = sample_state();

        state.select_view_named("friends").unwrap();
        assert_eq!(state.active_view(), LeaderboardView::Friends);

        state.select_view_named("appWide").unwrap();
        assert_eq!(state.active_view(), LeaderboardView::Global);

        state.select_view_named(" FRIENDS ").unwrap();
        assert_eq!(state.active_view(), LeaderboardView::Friends);
    }

    #[test]
    fn test_select_view_named_rejects_unknown() {
        let mut state = sample_state();
        state.select_view(LeaderboardView::Friends);

        let err = state.select_view_named("24h").unwrap_err();
        assert_eq!(
            err,
            ViewError::InvalidViewSelector {
                value: "24h".to_string()
            }
        );
        assert_eq!(state.active_view(), LeaderboardView::Friends);
    }

    #[test]
    fn test_toggle_view() {
        let mut state = sample_state();
        state.toggle_view();
        assert_eq!(state.active_view(), LeaderboardView::Friends);
        state.toggle_view();
        assert_eq!(state.active_view(), LeaderboardView::Global);
    }

    #[test]
    fn test_refresh_replaces_displayed_sequence() {
        let mut state = sample_state();
        state.select_view(LeaderboardView::Friends);

        let refreshed = vec![
            UserRecord::new("9", "Nine", "0.5", true),
            UserRecord::new("1", "One", "5.0", true),
        ];
        state.set_rankings(compute_rankings(&refreshed));

        assert_eq!(ids(state.displayed_sequence()), vec!["9", "1"]);
    }

    #[test]
    fn test_viewer_entry_follows_active_view() {
        let mut state = sample_state().with_viewer(Viewer::from_id("1"));

        assert_eq!(state.viewer_entry().unwrap().rank, 3);
        state.select_view(LeaderboardView::Friends);
        assert_eq!(state.viewer_entry().unwrap().rank, 2);

        state.set_viewer(Some(Viewer::from_id("2")));
        assert!(state.viewer_entry().is_none());
    }

    #[test]
    fn test_podium_of_displayed_sequence() {
        let mut state = sample_state();
        assert_eq!(state.podium().len(), 3);
        state.select_view(LeaderboardView::Friends);
        assert_eq!(state.podium().len(), 2);
    }

    #[test]
    fn test_view_from_str_and_display() {
        assert_eq!("global".parse::<LeaderboardView>(), Ok(LeaderboardView::Global));
        assert_eq!("app-wide".parse::<LeaderboardView>(), Ok(LeaderboardView::Global));
        assert!("".parse::<LeaderboardView>().is_err());
        assert_eq!(LeaderboardView::Friends.to_string(), "friends");
        assert_eq!(LeaderboardView::Global.display_name(), "Global Leaderboard");
    }
}
