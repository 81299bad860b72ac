//! Detail overlay for the selected entry.
//!
//! Rendered last so it sits on top of the table.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::context::RenderContext;
use crate::domain::RankedEntry;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};

const CARD_WIDTH: u16 = 44;
const CARD_HEIGHT: u16 = 10;

/// Card centered in `area`, shrunk to fit.
pub fn card_area(area: Rect) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let Some(entry) = ctx.view_state.selected() else {
        return;
    };

    let card = card_area(area);
    frame.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(" Player ")
        .title_bottom(Line::from(" esc close ").right_aligned());

    frame.render_widget(Paragraph::new(detail_lines(entry, ctx)).block(block), card);
}

fn detail_lines(entry: &RankedEntry, ctx: &RenderContext) -> Vec<Line<'static>> {
    let label = Style::default().fg(COLOR_DIM);
    let rankings = ctx.view_state.rankings();

    let rank_text = |found: Option<&RankedEntry>| match found {
        Some(e) => format!("#{}", e.rank),
        None => "-".to_string(),
    };

    let mut title = vec![Span::styled(
        entry.display_name.clone(),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if let Some(medal) = entry.medal() {
        title.push(Span::raw(format!(" {}", medal.symbol())));
    }

    vec![
        Line::from(title),
        Line::from(""),
        Line::from(vec![
            Span::styled("Carbon Emissions  ", label),
            Span::raw(entry.carbon_emission.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Global rank       ", label),
            Span::raw(rank_text(rankings.find_global(&entry.id))),
        ]),
        Line::from(vec![
            Span::styled("Friends rank      ", label),
            Span::raw(rank_text(rankings.find_friend(&entry.id))),
        ]),
        Line::from(vec![
            Span::styled("Avatar            ", label),
            Span::raw(entry.avatar_ref.clone().unwrap_or_else(|| "-".to_string())),
        ]),
        Line::from(vec![
            Span::styled("Id                ", label),
            Span::raw(entry.id.clone()),
        ]),
    ]
}
