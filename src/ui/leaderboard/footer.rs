//! Key hints and fetch status.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use super::context::RenderContext;
use crate::app::LoadStatus;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_LOADING};

/// Key hints for the current state.
pub fn get_footer_hint(ctx: &RenderContext) -> &'static str {
    if ctx.view_state.has_selection() {
        "esc close  q quit"
    } else {
        "tab/g/f view  ↑↓ move  enter details  r refresh  q quit"
    }
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let [hints, status] =
        Layout::horizontal([Constraint::Min(10), Constraint::Percentage(45)]).areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(get_footer_hint(ctx), Style::default().fg(COLOR_DIM))),
        hints,
    );

    let color = match ctx.status {
        LoadStatus::Failed { .. } => COLOR_ERROR,
        LoadStatus::Loading => COLOR_LOADING,
        _ => COLOR_DIM,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(ctx.status.status_line(), Style::default().fg(color)))
            .right_aligned(),
        status,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RankedEntry, Emission};
    use crate::view_state::LeaderboardViewState;

    #[test]
    fn test_footer_hint_switches_with_selection() {
        let status = LoadStatus::Idle;
        let mut state = LeaderboardViewState::new();
        assert!(get_footer_hint(&RenderContext::new(&state, 0, &status)).contains("enter"));

        state.select_entry(RankedEntry {
            rank: 1,
            id: "1".to_string(),
            display_name: "Ada".to_string(),
            avatar_ref: None,
            carbon_emission: Emission::new(1.0),
        });
        assert_eq!(
            get_footer_hint(&RenderContext::new(&state, 0, &status)),
            "esc close  q quit"
        );
    }
}
