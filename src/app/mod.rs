//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`LoadStatus`] - Outcome of the latest fetch
//! - [`AppMessage`] - Messages for async communication

mod fetch;
mod handlers;
mod keys;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::LoadStatus;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::models::Viewer;
use crate::startup::LeaderboardConfig;
use crate::traits::RecordSource;
use crate::view_state::LeaderboardViewState;

/// Main application state
pub struct App {
    /// Effective configuration
    pub config: LeaderboardConfig,
    /// Rankings, active view, selected entry and viewer
    pub view_state: LeaderboardViewState,
    /// Highlighted row in the displayed sequence
    pub cursor: usize,
    /// Outcome of the latest fetch
    pub load_status: LoadStatus,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever visible state changes
    pub needs_redraw: bool,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Where leaderboard records come from
    source: Arc<dyn RecordSource>,
    /// Id of the most recent fetch; older results are dropped
    latest_request: u64,
}

impl App {
    /// Create the app. No fetch is started until [`App::refresh`].
    pub fn new(config: LeaderboardConfig, source: Arc<dyn RecordSource>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut view_state = LeaderboardViewState::new().with_view(config.initial_view);
        if let Some(ref id) = config.viewer_id {
            view_state.set_viewer(Some(Viewer::from_id(id.as_str())));
        }

        Self {
            config,
            view_state,
            cursor: 0,
            load_status: LoadStatus::Idle,
            should_quit: false,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            source,
            latest_request: 0,
        }
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Description of the record source for the header.
    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::adapters::StaticRecordSource;
    use crate::models::UserRecord;

    pub fn sample_records() -> Vec<UserRecord> {
        vec![
            UserRecord::new("1", "Ada", "5.0", true),
            UserRecord::new("2", "Bo", "2.0", false),
            UserRecord::new("3", "Cy", "2.0", true),
            UserRecord::new("4", "Dee", "not-a-number", false),
        ]
    }

    pub fn app_with(records: Vec<UserRecord>, config: LeaderboardConfig) -> (App, StaticRecordSource) {
        let source = StaticRecordSource::new(records);
        let app = App::new(config, Arc::new(source.clone()));
        (app, source)
    }

    /// App with rankings already applied from `sample_records`.
    pub fn loaded_app(config: LeaderboardConfig) -> App {
        let (mut app, _) = app_with(sample_records(), config);
        app.latest_request = 1;
        app.handle_message(AppMessage::RecordsLoaded {
            request_id: 1,
            result: Ok(sample_records()),
        });
        app
    }
}
