//! Ranked table for the displayed sequence.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::context::RenderContext;
use super::podium::medal_color;
use crate::domain::RankedEntry;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR_BG, COLOR_DIM, COLOR_VIEWER};

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));

    let entries = ctx.view_state.displayed_sequence();
    if entries.is_empty() {
        let message = if ctx.status.is_loading() {
            "Loading..."
        } else {
            "No players on this leaderboard yet."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(COLOR_DIM)))
                .centered()
                .block(block),
            area,
        );
        return;
    }

    let header = Row::new(["Rank", "Name", "Carbon Emissions"])
        .style(Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD));

    let rows = entries.iter().map(|entry| entry_row(entry, ctx.is_viewer(&entry.id)));

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(12),
            Constraint::Length(18),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(COLOR_CURSOR_BG).add_modifier(Modifier::BOLD))
    .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(ctx.cursor));
    frame.render_stateful_widget(table, area, &mut state);
}

fn entry_row(entry: &RankedEntry, is_viewer: bool) -> Row<'static> {
    let rank = match entry.medal() {
        Some(medal) => Line::from(vec![
            Span::raw(format!("{} ", medal.symbol())),
            Span::styled(entry.rank.to_string(), Style::default().fg(medal_color(medal))),
        ]),
        None => Line::from(format!("   {}", entry.rank)),
    };

    let name = if is_viewer {
        Line::from(vec![
            Span::styled(entry.display_name.clone(), Style::default().fg(COLOR_VIEWER)),
            Span::styled(" (you)", Style::default().fg(COLOR_DIM)),
        ])
    } else {
        Line::from(entry.display_name.clone())
    };

    Row::new([
        Cell::from(rank),
        Cell::from(name),
        Cell::from(entry.carbon_emission.to_string()),
    ])
}
