//! The poll/compare/notify loop.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, error, info};

use reviewbot_api::{ApiError, HomeworkClient, StatusBatch};
use reviewbot_core::{status_change_message, FailureTracker, ReviewStatus, UnknownStatus};
use reviewbot_telegram::StatusNotifier;

/// Source of status batches, one per poll.
#[allow(async_fn_in_trait)]
pub trait Feed {
    /// Fetch status changes reported since `from_date`.
    async fn poll(&self, from_date: i64) -> Result<StatusBatch, ApiError>;
}

/// Destination for notification texts.
#[allow(async_fn_in_trait)]
pub trait Sink {
    /// Attempt delivery; `true` means the message reached the chat.
    async fn deliver(&self, text: &str) -> bool;
}

impl Feed for HomeworkClient {
    async fn poll(&self, from_date: i64) -> Result<StatusBatch, ApiError> {
        HomeworkClient::poll(self, from_date).await
    }
}

impl Sink for StatusNotifier {
    async fn deliver(&self, text: &str) -> bool {
        StatusNotifier::deliver(self, text).await
    }
}

/// Errors a poll cycle can raise before the notification stage.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Status(#[from] UnknownStatus),
}

/// Drives the fetch -> validate -> notify cycle for one tracked submission.
///
/// The watcher owns the only two pieces of state that survive across
/// cycles: the poll cursor and the failure-deduplication marker. Errors
/// raised anywhere inside a cycle are caught in [`Watcher::tick`]; nothing
/// short of process termination stops the loop.
pub struct Watcher<F, S> {
    feed: F,
    sink: S,
    interval: Duration,
    cursor: i64,
    failures: FailureTracker,
}

impl<F: Feed, S: Sink> Watcher<F, S> {
    /// Create a watcher that polls for changes reported after `start`.
    pub fn new(feed: F, sink: S, interval: Duration, start: i64) -> Self {
        Self {
            feed,
            sink,
            interval,
            cursor: start,
            failures: FailureTracker::new(),
        }
    }

    /// The cursor the next poll will use.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Run the loop forever, sleeping `interval` between cycles.
    pub async fn run(&mut self) {
        info!(interval_secs = self.interval.as_secs(), "starting watcher loop");
        loop {
            self.tick().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Execute one poll cycle, including the failure-notification path.
    pub async fn tick(&mut self) {
        match self.cycle().await {
            Ok(notified) => {
                self.failures.clear();
                if !notified {
                    debug!("homework status unchanged");
                }
            }
            Err(e) => self.report_failure(e).await,
        }
    }

    /// One fetch -> validate -> format -> notify pass.
    ///
    /// Returns whether a status-change notification was attempted. The
    /// cursor only advances when the whole pass succeeds, so a failed
    /// cycle retries with the same `from_date`.
    async fn cycle(&mut self) -> Result<bool, WatchError> {
        let batch = self.feed.poll(self.cursor).await?;
        let mut notified = false;

        if let Some(homework) = batch.first()? {
            let status: ReviewStatus = homework.status.parse()?;
            info!(
                name = %homework.homework_name,
                status = %status,
                "homework status changed"
            );
            let message = status_change_message(&homework.homework_name, status);
            self.sink.deliver(&message).await;
            notified = true;
        }

        if let Some(current_date) = batch.current_date() {
            self.cursor = current_date;
        }

        Ok(notified)
    }

    /// Report a failed cycle, suppressing repeats of the identical text.
    ///
    /// The marker is only updated when delivery succeeds, so a failure
    /// text that never reached the chat is retried next cycle.
    async fn report_failure(&mut self, err: WatchError) {
        let text = format!("Polling cycle failed: {}", err);
        error!(error = %err, "poll cycle failed");

        if !self.failures.should_send(&text) {
            debug!("failure already reported, skipping notification");
            return;
        }

        if self.sink.deliver(&text).await {
            self.failures.mark_sent(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// Feed that replays a script of poll results.
    struct ScriptedFeed {
        responses: Mutex<Vec<Result<StatusBatch, ApiError>>>,
    }

    impl ScriptedFeed {
        fn new(responses: Vec<Result<StatusBatch, ApiError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    impl Feed for &ScriptedFeed {
        async fn poll(&self, _from_date: i64) -> Result<StatusBatch, ApiError> {
            self.responses.lock().unwrap().remove(0)
        }
    }

    /// Sink that records every attempt and answers from a script
    /// (missing entries default to successful delivery).
    struct RecordingSink {
        attempts: Mutex<Vec<String>>,
        outcomes: Mutex<Vec<bool>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self::with_outcomes(vec![])
        }

        fn with_outcomes(outcomes: Vec<bool>) -> Self {
            Self {
                attempts: Mutex::new(vec![]),
                outcomes: Mutex::new(outcomes),
            }
        }

        fn attempts(&self) -> Vec<String> {
            self.attempts.lock().unwrap().clone()
        }
    }

    impl Sink for &RecordingSink {
        async fn deliver(&self, text: &str) -> bool {
            self.attempts.lock().unwrap().push(text.to_string());
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.is_empty() {
                true
            } else {
                outcomes.remove(0)
            }
        }
    }

    fn batch(body: serde_json::Value) -> Result<StatusBatch, ApiError> {
        Ok(StatusBatch::from_body(body).unwrap())
    }

    #[tokio::test]
    async fn test_known_status_notifies_once_and_advances_cursor() {
        let feed = ScriptedFeed::new(vec![batch(json!({
            "homeworks": [{"homework_name": "X", "status": "approved"}],
            "current_date": 1000,
        }))]);
        let sink = RecordingSink::new();
        let mut watcher = Watcher::new(&feed, &sink, Duration::from_secs(600), 500);

        watcher.tick().await;

        let attempts = sink.attempts();
        assert_eq!(attempts.len(), 1);
        assert_eq!(
            attempts[0],
            "Status changed for submission \"X\". \
             The review is done: the reviewer liked everything. Hooray!"
        );
        assert_eq!(watcher.cursor(), 1000);
    }

    #[tokio::test]
    async fn test_empty_batch_is_quiet_but_advances_cursor() {
        let feed = ScriptedFeed::new(vec![batch(json!({
            "homeworks": [],
            "current_date": 2000,
        }))]);
        let sink = RecordingSink::new();
        let mut watcher = Watcher::new(&feed, &sink, Duration::from_secs(600), 500);

        watcher.tick().await;

        assert!(sink.attempts().is_empty());
        assert_eq!(watcher.cursor(), 2000);
    }

    #[tokio::test]
    async fn test_missing_current_date_keeps_cursor() {
        let feed = ScriptedFeed::new(vec![batch(json!({"homeworks": []}))]);
        let sink = RecordingSink::new();
        let mut watcher = Watcher::new(&feed, &sink, Duration::from_secs(600), 500);

        watcher.tick().await;

        assert_eq!(watcher.cursor(), 500);
    }

    #[tokio::test]
    async fn test_unknown_status_reports_failure_without_advancing() {
        let feed = ScriptedFeed::new(vec![batch(json!({
            "homeworks": [{"homework_name": "X", "status": "graded"}],
            "current_date": 1000,
        }))]);
        let sink = RecordingSink::new();
        let mut watcher = Watcher::new(&feed, &sink, Duration::from_secs(600), 500);

        watcher.tick().await;

        let attempts = sink.attempts();
        assert_eq!(attempts.len(), 1);
        assert!(attempts[0].starts_with("Polling cycle failed:"));
        assert!(attempts[0].contains("graded"));
        assert_eq!(watcher.cursor(), 500);
    }

    #[tokio::test]
    async fn test_shape_error_keeps_cursor_and_loop_alive() {
        let feed = ScriptedFeed::new(vec![
            Err(ApiError::HomeworksNotList),
            batch(json!({"homeworks": [], "current_date": 900})),
        ]);
        let sink = RecordingSink::new();
        let mut watcher = Watcher::new(&feed, &sink, Duration::from_secs(600), 500);

        watcher.tick().await;
        assert_eq!(watcher.cursor(), 500);

        watcher.tick().await;
        assert_eq!(watcher.cursor(), 900);
    }

    #[tokio::test]
    async fn test_failed_delivery_of_failure_text_is_retried() {
        let feed = ScriptedFeed::new(vec![
            Err(ApiError::HomeworksNotList),
            Err(ApiError::HomeworksNotList),
        ]);
        // First delivery attempt is rejected, second succeeds.
        let sink = RecordingSink::with_outcomes(vec![false, true]);
        let mut watcher = Watcher::new(&feed, &sink, Duration::from_secs(600), 500);

        watcher.tick().await;
        watcher.tick().await;

        // Identical text both times: the marker was not set by the failed
        // attempt, so the second cycle tried again.
        let attempts = sink.attempts();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0], attempts[1]);
    }
}
