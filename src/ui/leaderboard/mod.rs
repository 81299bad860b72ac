//! Leaderboard screen
//!
//! ```text
//! ┌ header: title ............................ viewer card ┐
//! │ tabs:   Global Leaderboard (n) | Friends Leaderboard (m) │
//! │ podium: [ 🥈 #2 ] [ 👑 #1 ] [ 🥉 #3 ]                    │
//! │ table:  Rank  Name  Carbon Emissions                     │
//! └ footer: key hints .............................. status ┘
//! ```
//!
//! The detail overlay is drawn last, on top of everything else.

pub mod context;
pub mod footer;
pub mod header;
pub mod overlay;
pub mod podium;
pub mod table;
pub mod tabs;

pub use context::RenderContext;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

/// Render the complete leaderboard screen into `area`.
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let podium_height = if ctx.view_state.podium().is_empty() {
        0
    } else {
        podium::PODIUM_HEIGHT
    };

    let [header_area, tabs_area, podium_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(podium_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    header::render(frame, header_area, ctx);
    tabs::render(frame, tabs_area, ctx);
    podium::render(frame, podium_area, ctx);
    table::render(frame, table_area, ctx);
    footer::render(frame, footer_area, ctx);

    overlay::render(frame, area, ctx);
}
