use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::services::watcher::{StatusSource, WatchError};

/// Practicum homework-statuses endpoint.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Practicum API client
/// Handles all communication with the homework-statuses endpoint.
pub struct PracticumClient {
    client: Client,
    token: String,
    base_url: String,
}

impl PracticumClient {
    pub fn new(token: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            token,
            base_url: ENDPOINT.to_string(),
        }
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, WatchError> {
        tracing::debug!("requesting review statuses from_date={}", from_date);

        let response = self
            .client
            .get(&self.base_url)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| WatchError::Transport(format!("{} is unreachable: {}", self.base_url, e)))?;

        if !response.status().is_success() {
            return Err(WatchError::Remote(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| WatchError::Schema(e.to_string()))
    }
}
