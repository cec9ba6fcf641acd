///! Post orchestration: fetch the APOD record, format it, publish it.

use anyhow::Result;

use super::apod::{ApodFetcher, ApodRecord, FetchError};
use super::telegram::{PublishError, TelegramPublisher};

/// A formatted channel post, ready to hand to Telegram.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishMessage {
    pub caption: String,
    pub image_url: String,
}

impl PublishMessage {
    pub fn from_record(record: &ApodRecord) -> Self {
        let caption = format!(
            "\n🌟 *NASA Astronomy Picture of the Day*\n\n*{}*\n📅 Date: {}\n\n{}\n\n🔭 Image Credit: NASA\n",
            record.title, record.date, record.explanation
        );
        Self {
            caption,
            image_url: record.image_url().to_string(),
        }
    }
}

/// What a single republish cycle amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    Posted { message_id: i64 },
    /// The NASA API gave us nothing usable; nothing was sent.
    NoData,
    /// We had a record but Telegram rejected the post.
    PublishFailed,
}

pub struct Poster {
    fetcher: ApodFetcher,
    publisher: TelegramPublisher,
}

impl Poster {
    pub fn new(fetcher: ApodFetcher, publisher: TelegramPublisher) -> Self {
        Self { fetcher, publisher }
    }

    /// Runs one fetch-and-publish cycle.
    ///
    /// Upstream hiccups (NASA down, Telegram rejecting the post) are logged
    /// and reported in the outcome rather than returned as errors; only a
    /// missing credential is an `Err`, since no amount of retrying fixes it.
    pub async fn run_once(&self) -> Result<PostOutcome> {
        let record = match self.fetcher.fetch().await {
            Ok(record) => record,
            Err(err @ FetchError::MissingApiKey) => return Err(err.into()),
            Err(err) => {
                tracing::error!("No APOD data received: {err}");
                return Ok(PostOutcome::NoData);
            }
        };

        let message = PublishMessage::from_record(&record);
        match self
            .publisher
            .send_photo(&message.caption, &message.image_url)
            .await
        {
            Ok(sent) => {
                tracing::info!(
                    "Posted APOD \"{}\" to Telegram (message id {})",
                    record.title,
                    sent.message_id
                );
                Ok(PostOutcome::Posted {
                    message_id: sent.message_id,
                })
            }
            Err(err @ (PublishError::MissingBotToken | PublishError::MissingChannelId)) => {
                Err(err.into())
            }
            Err(err) => {
                tracing::error!("Failed to publish APOD to Telegram: {err}");
                Ok(PostOutcome::PublishFailed)
            }
        }
    }
}
