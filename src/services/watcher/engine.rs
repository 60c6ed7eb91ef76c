use std::time::Duration;

use serde_json::Value;

use super::tracker::TransitionTracker;
use super::types::{Messenger, StatusSource, WatchError};
use super::{check_response, parse_status};

/// Fixed poll period. Not adaptive and not shortened by early success.
pub const POLL_PERIOD: Duration = Duration::from_secs(600);

/// The poll-detect-notify driver.
///
/// Owns the transition state and the watermark; everything fallible in an
/// iteration is contained in `poll_once`, so `run` can only be stopped by
/// killing the process.
pub struct WatcherEngine<S, M> {
    source: S,
    messenger: M,
    tracker: TransitionTracker,
    watermark: i64,
}

impl<S: StatusSource, M: Messenger> WatcherEngine<S, M> {
    pub fn new(source: S, messenger: M, initial_watermark: i64) -> Self {
        Self {
            source,
            messenger,
            tracker: TransitionTracker::new(),
            watermark: initial_watermark,
        }
    }

    /// Start the polling loop. The interval spacing is unconditional:
    /// failed iterations wait out the same period as successful ones.
    pub async fn run(&mut self) {
        let mut interval = tokio::time::interval(POLL_PERIOD);

        loop {
            interval.tick().await;
            self.poll_once().await;
        }
    }

    /// One full fetch-validate-interpret-decide-notify iteration.
    ///
    /// Every `WatchError` is absorbed here: logged, formatted as an
    /// operational-failure report and pushed through the same dedup path
    /// as status updates.
    pub async fn poll_once(&mut self) {
        if let Err(err) = self.try_poll().await {
            tracing::error!("poll iteration failed: {}", err);
            let message = format!("Сбой в работе программы {}", err);
            self.dispatch(&message).await;
        }
    }

    async fn try_poll(&mut self) -> Result<(), WatchError> {
        // 1. Fetch everything newer than the current watermark
        let response = self.source.fetch_statuses(self.watermark).await?;

        // 2. Shape-check before touching any field
        let homeworks = check_response(&response)?;

        // 3. Only the first (most recent) record matters
        match homeworks.first() {
            Some(record) => {
                let message = parse_status(record)?;
                self.dispatch(&message).await;
            }
            None => tracing::debug!("no review activity since the last poll"),
        }

        // 4. Advance the watermark from the server's own clock; a missing
        //    field holds the previous value rather than going backward
        match response.get("current_date").and_then(Value::as_i64) {
            Some(next) => self.watermark = next,
            None => tracing::warn!(
                "response carries no current_date, keeping watermark {}",
                self.watermark
            ),
        }

        Ok(())
    }

    /// Sends `message` unless it repeats the previously delivered one.
    /// Tracker state advances only when delivery actually succeeded, so a
    /// failed send is retried on the next transition check.
    async fn dispatch(&mut self, message: &str) {
        if !self.tracker.should_notify(message) {
            tracing::debug!("suppressing repeat notification");
            return;
        }

        if self.notify(message).await {
            self.tracker.record_sent(message);
        }
    }

    /// Delivery failures are logged and swallowed; a broken chat channel
    /// must not stop future polling attempts.
    async fn notify(&self, text: &str) -> bool {
        tracing::debug!("sending notification");
        match self.messenger.send_text(text).await {
            Ok(()) => {
                tracing::debug!("notification delivered");
                true
            }
            Err(err) => {
                tracing::error!("failed to deliver notification: {}", err);
                false
            }
        }
    }
}
