//! View tabs (Global / Friends).

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Tabs,
    Frame,
};

use super::context::RenderContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::view_state::LeaderboardView;

const VIEWS: [LeaderboardView; 2] = [LeaderboardView::Global, LeaderboardView::Friends];

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let active = ctx.view_state.active_view();
    let titles = VIEWS.iter().map(|view| {
        let count = match view {
            LeaderboardView::Global => ctx.view_state.rankings().global.len(),
            LeaderboardView::Friends => ctx.view_state.rankings().friends.len(),
        };
        Line::from(format!("{} ({})", view.display_name(), count))
    });

    let selected = VIEWS.iter().position(|view| *view == active).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(COLOR_DIM))
        .highlight_style(
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|");

    frame.render_widget(tabs, area);
}
