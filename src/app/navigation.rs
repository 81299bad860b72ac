//! Navigation methods for the App.

use crate::domain::RankedEntry;
use crate::view_state::LeaderboardView;

use super::App;

impl App {
    /// Entry under the cursor in the displayed sequence.
    pub fn highlighted_entry(&self) -> Option<&RankedEntry> {
        self.view_state.displayed_sequence().get(self.cursor)
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.view_state.displayed_sequence().len() {
            self.cursor += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.cursor = self.view_state.displayed_sequence().len().saturating_sub(1);
    }

    /// Keep the cursor inside the displayed sequence.
    pub(crate) fn clamp_cursor(&mut self) {
        let len = self.view_state.displayed_sequence().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    /// Switch views and move the cursor to the top of the new sequence.
    pub fn switch_view(&mut self, view: LeaderboardView) {
        if self.view_state.active_view() == view {
            return;
        }
        self.view_state.select_view(view);
        self.cursor = 0;
    }

    pub fn toggle_view(&mut self) {
        self.switch_view(self.view_state.active_view().toggled());
    }

    /// Open the highlighted entry in the detail overlay.
    pub fn select_highlighted(&mut self) {
        if let Some(entry) = self.highlighted_entry().cloned() {
            self.view_state.select_entry(entry);
        }
    }

    pub fn clear_selection(&mut self) {
        self.view_state.clear_selection();
    }
}
