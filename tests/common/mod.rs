//! Common test utilities for integration tests.
//!
//! Fixture records, a builder for test [`App`]s and mock HTTP configs.
//!
//! # Example
//!
//! ```ignore
//! use common::{TestAppBuilder, worked_example};
//!
//! let app = TestAppBuilder::new().with_records(worked_example()).build_loaded();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use carbonboard::adapters::StaticRecordSource;
use carbonboard::app::{App, AppMessage};
use carbonboard::models::UserRecord;
use carbonboard::startup::LeaderboardConfig;
use carbonboard::view_state::LeaderboardView;

/// The three-player example: global order 2, 3, 1; friends order 3, 1.
pub fn worked_example() -> Vec<UserRecord> {
    vec![
        UserRecord::new("1", "Ada", "5.0", true),
        UserRecord::new("2", "Bo", "2.0", false),
        UserRecord::new("3", "Cy", "2.0", true),
    ]
}

/// A larger batch with medals, ties, an unparseable value and an avatar.
pub fn mixed_records() -> Vec<UserRecord> {
    vec![
        UserRecord::new("a", "Ana", "12.5", false).with_avatar("https://img.example/ana.png"),
        UserRecord::new("b", "Ben", "3", true),
        UserRecord::new("c", "Cho", "not-a-number", true),
        UserRecord::new("d", "Dev", "7.25", false),
        UserRecord::new("e", "Eli", "3.0", true),
        UserRecord::new("f", "Fay", "0", false),
    ]
}

/// JSON body as served by the leaderboard endpoint.
pub fn leaderboard_json() -> serde_json::Value {
    serde_json::json!({
        "users": [
            { "_id": "1", "fullName": "Ada Lovelace", "imageURL": "ada.png",
              "carbonEmission": "5.0", "isFriend": true },
            { "_id": "2", "name": "Bo", "carbonEmission": 2, "isFriend": false },
            { "_id": "3", "fullName": "Cy", "carbonEmission": "2.0", "isFriend": true },
            { "fullName": "No Id", "carbonEmission": "1" }
        ]
    })
}

/// Builder for creating test App instances.
#[derive(Default)]
pub struct TestAppBuilder {
    records: Vec<UserRecord>,
    viewer_id: Option<String>,
    view: Option<LeaderboardView>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, records: Vec<UserRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn with_viewer(mut self, id: &str) -> Self {
        self.viewer_id = Some(id.to_string());
        self
    }

    pub fn with_view(mut self, view: LeaderboardView) -> Self {
        self.view = Some(view);
        self
    }

    fn config(&self) -> LeaderboardConfig {
        let mut config = LeaderboardConfig::default();
        if let Some(ref id) = self.viewer_id {
            config = config.with_viewer_id(id.as_str());
        }
        if let Some(view) = self.view {
            config = config.with_initial_view(view);
        }
        config
    }

    /// App backed by a static source; nothing fetched yet.
    pub fn build(self) -> (App, StaticRecordSource) {
        let source = StaticRecordSource::new(self.records.clone());
        let app = App::new(self.config(), Arc::new(source.clone()));
        (app, source)
    }

    /// App after one completed refresh.
    pub async fn build_loaded(self) -> App {
        let (mut app, _) = self.build();
        let mut rx = app.message_rx.take().expect("receiver present");
        app.refresh();
        let message: AppMessage = rx.recv().await.expect("fetch result");
        app.handle_message(message);
        app
    }
}
