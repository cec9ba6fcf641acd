///! NASA APOD API client
///!
///! Fetches the current "Astronomy Picture of the Day" entry from the
///! NASA open API (https://api.nasa.gov/planetary/apod).

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::types::ApodRecord;
use crate::config::Config;

const DEFAULT_API_BASE: &str = "https://api.nasa.gov";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("NASA_API_KEY is not configured")]
    MissingApiKey,
    #[error("NASA APOD request failed: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },
    #[error("NASA APOD returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed NASA APOD body ({source}): {body}")]
    Parse {
        source: serde_json::Error,
        body: String,
    },
}

pub struct ApodFetcher {
    client: Client,
    config: Arc<Config>,
    api_base: String,
}

impl ApodFetcher {
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

    pub async fn fetch(&self) -> Result<ApodRecord, FetchError> {
        let api_key = self
            .config
            .nasa_api_key
            .as_deref()
            .ok_or(FetchError::MissingApiKey)?;
        let url = format!("{}/planetary/apod", self.api_base);

        tracing::info!("Fetching NASA APOD...");
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", api_key)])
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status { status, body });
        }

        let record: ApodRecord =
            serde_json::from_str(&body).map_err(|source| FetchError::Parse { source, body })?;
        tracing::info!("NASA APOD data received: {} ({})", record.title, record.date);
        Ok(record)
    }
}
