//! Leaderboard header
//!
//! Title on the left, the viewer card on the right.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::context::RenderContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_VIEWER};

/// Application title
pub const TITLE: &str = "Carbon Leaderboard";

/// Render the two-row header.
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    if area.height == 0 {
        return;
    }

    let [left, right] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(36)]).areas(area);

    let title = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "lowest emissions rank first",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(title), left);

    frame.render_widget(Paragraph::new(viewer_lines(ctx)).right_aligned(), right);
}

/// Viewer name, own score and rank in the displayed view.
fn viewer_lines(ctx: &RenderContext) -> Vec<Line<'static>> {
    let Some(viewer) = ctx.view_state.viewer() else {
        return vec![Line::from(Span::styled(
            "not signed in (--viewer <id>)",
            Style::default().fg(COLOR_DIM),
        ))];
    };

    let rank = match ctx.view_state.viewer_entry() {
        Some(entry) => format!("#{}", entry.rank),
        None => "unranked".to_string(),
    };

    vec![
        Line::from(vec![
            Span::styled(
                viewer.display_name.clone(),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", rank), Style::default().fg(COLOR_VIEWER)),
        ]),
        Line::from(vec![
            Span::styled("CO2 Reduction ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                viewer.carbon_emission.to_string(),
                Style::default().fg(COLOR_VIEWER),
            ),
        ]),
    ]
}
