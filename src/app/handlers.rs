//! Message handling for the App.

use chrono::Local;

use crate::domain::compute_rankings;
use crate::models::Viewer;

use super::{App, AppMessage, LoadStatus};

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::RecordsLoaded { request_id, result } => {
                if request_id != self.latest_request {
                    tracing::debug!(
                        "Dropping stale leaderboard result #{} (latest #{})",
                        request_id,
                        self.latest_request
                    );
                    return;
                }

                match result {
                    Ok(records) => {
                        let rankings = compute_rankings(&records);
                        tracing::info!(
                            "Leaderboard #{} loaded: {} players, {} friends",
                            request_id,
                            rankings.global.len(),
                            rankings.friends.len()
                        );

                        if let Some(ref id) = self.config.viewer_id {
                            self.view_state
                                .set_viewer(Some(Viewer::resolve(id, &records)));
                        }
                        self.view_state.set_rankings(rankings);
                        self.clamp_cursor();
                        self.load_status = LoadStatus::Loaded {
                            fetched_at: Local::now(),
                            record_count: records.len(),
                        };
                    }
                    Err(err) => {
                        tracing::error!(
                            "Leaderboard #{} failed [{}]: {}",
                            request_id,
                            err.error_code(),
                            err
                        );
                        self.load_status = LoadStatus::Failed {
                            message: format!("{} ({})", err.user_message(), err.recovery_hint()),
                        };
                    }
                }
            }
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::error::NetworkError;
    use crate::startup::LeaderboardConfig;

    #[test]
    fn test_loaded_records_are_ranked() {
        let app = loaded_app(LeaderboardConfig::default());

        let ids: Vec<&str> = app
            .view_state
            .displayed_sequence()
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3", "1", "4"]);
        assert!(matches!(
            app.load_status,
            LoadStatus::Loaded { record_count: 4, .. }
        ));
    }

    #[test]
    fn test_viewer_resolved_from_records() {
        let app = loaded_app(LeaderboardConfig::default().with_viewer_id("3"));

        let viewer = app.view_state.viewer().unwrap();
        assert_eq!(viewer.display_name, "Cy");
        assert_eq!(app.view_state.viewer_entry().map(|e| e.rank), Some(2));
    }

    #[test]
    fn test_failure_keeps_previous_rankings() {
        let mut app = loaded_app(LeaderboardConfig::default());
        app.latest_request = 2;

        app.handle_message(AppMessage::RecordsLoaded {
            request_id: 2,
            result: Err(NetworkError::Timeout {
                operation: "GET".to_string(),
                duration_secs: 15,
            }
            .into()),
        });

        assert_eq!(app.view_state.displayed_sequence().len(), 4);
        assert!(matches!(app.load_status, LoadStatus::Failed { .. }));
    }

    #[test]
    fn test_stale_result_ignored() {
        let mut app = loaded_app(LeaderboardConfig::default());
        app.latest_request = 5;
        app.needs_redraw = false;

        app.handle_message(AppMessage::RecordsLoaded {
            request_id: 4,
            result: Ok(vec![]),
        });

        assert_eq!(app.view_state.displayed_sequence().len(), 4);
        assert!(!app.needs_redraw);
    }

    #[test]
    fn test_refresh_keeps_selection() {
        let mut app = loaded_app(LeaderboardConfig::default());
        app.select_highlighted();
        let selected = app.view_state.selected().cloned();

        app.latest_request = 2;
        app.handle_message(AppMessage::RecordsLoaded {
            request_id: 2,
            result: Ok(vec![]),
        });

        assert_eq!(app.view_state.selected().cloned(), selected);
        assert_eq!(app.cursor, 0);
    }
}
