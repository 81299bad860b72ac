//! UI rendering for carbonboard.
//!
//! Renderers only read state; all mutation goes through [`crate::app::App`].

pub mod leaderboard;
mod theme;

pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BRONZE, COLOR_CURSOR_BG, COLOR_DIALOG_BG, COLOR_DIM,
    COLOR_ERROR, COLOR_GOLD, COLOR_HEADER, COLOR_LOADING, COLOR_SILVER, COLOR_VIEWER,
};

use ratatui::{layout::Margin, Frame};

use crate::app::App;
use leaderboard::RenderContext;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area().inner(Margin::new(1, 0));
    leaderboard::render(frame, area, &RenderContext::from_app(app));
}
