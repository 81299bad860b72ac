//! Plain-text leaderboard output for `--print`.

use unicode_width::UnicodeWidthStr;

use crate::domain::compute_rankings;
use crate::error::LeaderboardResult;
use crate::models::Viewer;
use crate::startup::LeaderboardConfig;
use crate::traits::RecordSource;
use crate::view_state::LeaderboardViewState;

const NAME_COLUMN_MIN: usize = 4;
const RANK_COLUMN: usize = 7;

/// Render the displayed sequence as an aligned text table.
///
/// Medal holders get their medal next to the rank, and the viewer's own row
/// is marked with `*`.
pub fn render_plain(state: &LeaderboardViewState) -> String {
    let mut out = String::new();
    out.push_str(state.active_view().display_name());
    out.push('\n');

    if let Some(viewer) = state.viewer() {
        out.push_str(&format!(
            "Viewer: {} (CO2 Reduction: {})\n",
            viewer.display_name, viewer.carbon_emission
        ));
    }
    out.push('\n');

    let entries = state.displayed_sequence();
    if entries.is_empty() {
        out.push_str("No entries.\n");
        return out;
    }

    let name_width = entries
        .iter()
        .map(|entry| entry.display_name.width())
        .max()
        .unwrap_or(0)
        .max(NAME_COLUMN_MIN);

    out.push_str(&format!(
        "{}{}  Carbon Emissions\n",
        pad("Rank", RANK_COLUMN),
        pad("Name", name_width)
    ));

    let viewer_id = state.viewer().map(|viewer| viewer.id.as_str());
    for entry in entries {
        let rank = match entry.medal() {
            Some(medal) => format!("{} {}", medal.symbol(), entry.rank),
            None => format!("   {}", entry.rank),
        };
        let marker = if Some(entry.id.as_str()) == viewer_id { " *" } else { "" };
        out.push_str(&format!(
            "{}{}  {}{}\n",
            pad(&rank, RANK_COLUMN),
            pad(&entry.display_name, name_width),
            entry.carbon_emission,
            marker
        ));
    }

    out
}

/// Fetch once and render the configured view as text.
pub async fn fetch_plain(
    config: &LeaderboardConfig,
    source: &dyn RecordSource,
) -> LeaderboardResult<String> {
    let records = source.fetch_records().await?;

    let mut state = LeaderboardViewState::new().with_view(config.initial_view);
    if let Some(ref id) = config.viewer_id {
        state.set_viewer(Some(Viewer::resolve(id, &records)));
    }
    state.set_rankings(compute_rankings(&records));

    Ok(render_plain(&state))
}

/// Pad to a display width, counting wide glyphs correctly.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
