use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::services::watcher::{DeliveryError, Messenger};

const API_BASE: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Telegram Bot API client bound to a single chat.
pub struct TelegramClient {
    client: Client,
    token: String,
    chat_id: String,
    base_url: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Bot API envelope: failures come back as `ok: false` plus a
/// human-readable description, sometimes with a 2xx status.
#[derive(Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(token: String, chat_id: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            token,
            chat_id,
            base_url: API_BASE.to_string(),
        }
    }
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send_text(&self, text: &str) -> Result<(), DeliveryError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let payload = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        let status = response.status();
        let body: SendMessageResponse = response
            .json()
            .await
            .map_err(|e| DeliveryError::Network(format!("status {}: {}", status, e)))?;

        if !body.ok {
            return Err(DeliveryError::Rejected(
                body.description
                    .unwrap_or_else(|| format!("status {}", status)),
            ));
        }

        Ok(())
    }
}
