//! Color theme constants for the leaderboard UI.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Border color for panels and cards
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for titles and the active tab
pub const COLOR_ACCENT: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background of the highlighted table row
pub const COLOR_CURSOR_BG: Color = Color::Rgb(30, 45, 35);

/// The viewer's own row and card
pub const COLOR_VIEWER: Color = Color::LightGreen;

/// Status line when a fetch failed
pub const COLOR_ERROR: Color = Color::Red;

/// Status line while loading
pub const COLOR_LOADING: Color = Color::Gray;

// ============================================================================
// Medal Colors
// ============================================================================

pub const COLOR_GOLD: Color = Color::Rgb(255, 200, 0);
pub const COLOR_SILVER: Color = Color::Rgb(192, 192, 192);
pub const COLOR_BRONZE: Color = Color::Rgb(205, 127, 50);

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for the detail overlay
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 25, 18);
