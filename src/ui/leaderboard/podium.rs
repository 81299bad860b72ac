//! Top-three podium cards.
//!
//! Cards are laid out silver, gold, bronze so first place sits in the middle.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::context::RenderContext;
use crate::domain::{Medal, RankedEntry};
use crate::ui::theme::{COLOR_BORDER, COLOR_BRONZE, COLOR_DIM, COLOR_GOLD, COLOR_SILVER};

/// Rows taken by the podium.
pub const PODIUM_HEIGHT: u16 = 4;

pub fn medal_color(medal: Medal) -> Color {
    match medal {
        Medal::Gold => COLOR_GOLD,
        Medal::Silver => COLOR_SILVER,
        Medal::Bronze => COLOR_BRONZE,
    }
}

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let podium = ctx.view_state.podium();
    if podium.is_empty() {
        return;
    }

    let slots: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);
    // Display order: 2nd, 1st, 3rd
    for (slot, index) in slots.into_iter().zip([1usize, 0, 2]) {
        if let Some(entry) = podium.get(index) {
            render_card(frame, slot, entry, ctx.is_viewer(&entry.id));
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, entry: &RankedEntry, is_viewer: bool) {
    let color = entry.medal().map(medal_color).unwrap_or(COLOR_DIM);
    let symbol = entry.medal().map(|medal| medal.symbol()).unwrap_or("");

    let mut name_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if is_viewer {
        name_style = name_style.add_modifier(Modifier::UNDERLINED);
    }

    let lines = vec![
        Line::from(vec![
            Span::raw(format!("{} ", symbol)),
            Span::styled(entry.display_name.clone(), name_style),
        ]),
        Line::from(Span::styled(
            format!("{} CO2", entry.carbon_emission),
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" #{} ", entry.rank));

    frame.render_widget(Paragraph::new(lines).centered().block(block), area);
}
