use async_trait::async_trait;
use serde_json::Value;

/// Everything a single poll iteration can fail with.
///
/// Every variant here is recoverable: the loop logs it, sends at most one
/// deduplicated notification, and carries on. Fatal problems (missing
/// credentials) are a `ConfigError` and never reach the loop; chat
/// delivery faults are a `DeliveryError` and never leave the notifier.
#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected response status {0}")]
    Remote(u16),
    #[error("malformed response: {0}")]
    Schema(String),
    #[error("record has no '{0}' field")]
    MissingField(&'static str),
    #[error("unknown review status '{0}'")]
    UnknownStatus(String),
}

/// Chat delivery failure. Contained inside the notifier so a broken
/// channel cannot stop future polling.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("chat API rejected the message: {0}")]
    Rejected(String),
}

/// Remote source of review statuses.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches all review activity newer than `from_date` (epoch seconds).
    /// The payload is returned raw; shape checking happens downstream.
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, WatchError>;
}

/// Outbound chat channel.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, text: &str) -> Result<(), DeliveryError>;
}
