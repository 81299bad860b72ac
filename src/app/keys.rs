//! Keyboard handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::view_state::LeaderboardView;

use super::App;

impl App {
    /// Apply a key press.
    ///
    /// While the detail overlay is open only dismiss and quit keys apply.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.view_state.has_selection() {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => self.clear_selection(),
                KeyCode::Char('q') => self.quit(),
                _ => return,
            }
            self.mark_dirty();
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_view(),
            KeyCode::Char('g') => self.switch_view(LeaderboardView::Global),
            KeyCode::Char('f') => self.switch_view(LeaderboardView::Friends),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Home => self.move_to_top(),
            KeyCode::End => self.move_to_bottom(),
            KeyCode::Enter => self.select_highlighted(),
            KeyCode::Char('r') => {
                if !self.load_status.is_loading() {
                    self.refresh();
                }
            }
            _ => return,
        }
        self.mark_dirty();
    }
}
