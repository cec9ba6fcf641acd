///! Telegram Bot API client for publishing channel posts
///!
///! Speaks the HTTP Bot API directly (https://api.telegram.org/bot<token>/...),
///! which is all that is needed for a bot that only sends photos.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;

use super::types::{ApiResponse, SentMessage};
use crate::config::Config;

const DEFAULT_API_BASE: &str = "https://api.telegram.org";

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("TELEGRAM_BOT_TOKEN is not configured")]
    MissingBotToken,
    #[error("TELEGRAM_CHANNEL_ID is not configured")]
    MissingChannelId,
    #[error("Telegram request failed: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },
    #[error("Telegram API error (HTTP {status}, code {error_code:?}): {description:?}")]
    Api {
        status: StatusCode,
        error_code: Option<i64>,
        description: Option<String>,
    },
    #[error("unexpected Telegram response: {body}")]
    Malformed { body: String },
}

#[derive(Debug, Serialize)]
struct SendPhotoRequest<'a> {
    chat_id: &'a str,
    photo: &'a str,
    caption: &'a str,
    parse_mode: &'a str,
}

pub struct TelegramPublisher {
    client: Client,
    config: Arc<Config>,
    api_base: String,
}

impl TelegramPublisher {
    pub fn new(client: Client, config: Arc<Config>) -> Self {
        Self::with_base_url(client, config, DEFAULT_API_BASE)
    }

    /// Client pointed at a custom API base (for testing).
    pub fn with_base_url(client: Client, config: Arc<Config>, api_base: impl Into<String>) -> Self {
        Self {
            client,
            config,
            api_base: api_base.into(),
        }
    }

    /// Posts a photo with a Markdown caption to the configured channel and
    /// returns the message Telegram created.
    pub async fn send_photo(
        &self,
        caption: &str,
        photo_url: &str,
    ) -> Result<SentMessage, PublishError> {
        let token = self
            .config
            .bot_token
            .as_deref()
            .ok_or(PublishError::MissingBotToken)?;
        let chat_id = self
            .config
            .channel_id
            .as_deref()
            .ok_or(PublishError::MissingChannelId)?;
        let url = format!("{}/bot{}/sendPhoto", self.api_base, token);

        tracing::debug!("Sending photo to Telegram channel {}", chat_id);
        let payload = SendPhotoRequest {
            chat_id,
            photo: photo_url,
            caption,
            parse_mode: "Markdown",
        };
        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope: ApiResponse = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            // Telegram error pages are not always JSON (e.g. gateway errors).
            Err(_) if !status.is_success() => {
                return Err(PublishError::Api {
                    status,
                    error_code: None,
                    description: Some(body),
                });
            }
            Err(_) => return Err(PublishError::Malformed { body }),
        };
        if !envelope.ok || !status.is_success() {
            return Err(PublishError::Api {
                status,
                error_code: envelope.error_code,
                description: envelope.description,
            });
        }
        envelope.result.ok_or(PublishError::Malformed { body })
    }
}
