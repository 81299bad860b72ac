//! Background record fetching.

use super::{App, AppMessage, LoadStatus};

impl App {
    /// Start a fetch on the tokio runtime.
    ///
    /// The result comes back as [`AppMessage::RecordsLoaded`]. Starting a new
    /// fetch supersedes any still in flight. Must be called within a runtime.
    pub fn refresh(&mut self) {
        self.latest_request += 1;
        let request_id = self.latest_request;

        let source = self.source.clone();
        let tx = self.message_tx.clone();

        tracing::info!("Fetching leaderboard #{} from {}", request_id, source.describe());
        self.load_status = LoadStatus::Loading;
        self.mark_dirty();

        tokio::spawn(async move {
            let result = source.fetch_records().await;
            // Receiver is gone only when the app is shutting down
            let _ = tx.send(AppMessage::RecordsLoaded { request_id, result });
        });
    }
}
