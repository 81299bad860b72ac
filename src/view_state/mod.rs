//! View state for the leaderboard screen.
//!
//! UI rendering is a pure function of this state: the app owns a
//! [`LeaderboardViewState`], feeds it fresh rankings, and the renderer only
//! reads from it.
//!
//! ```text
//! ┌─────────────────┐   compute_rankings   ┌────────────────────────┐
//! │  record source  │ ───────────────────▶ │  LeaderboardViewState  │
//! └─────────────────┘                      └───────────┬────────────┘
//!                                                      │ displayed_sequence()
//!                                                      ▼
//!                                          ┌────────────────────────┐
//!                                          │           UI           │
//!                                          └────────────────────────┘
//! ```

pub mod leaderboard_view;

pub use leaderboard_view::{LeaderboardView, LeaderboardViewState};
