///! Telegram Bot API module
///!
///! Publishes photo posts to the configured channel via the HTTP Bot API.

pub mod publisher;
pub mod types;

pub use publisher::{PublishError, TelegramPublisher};
pub use types::{ApiResponse, SentMessage};
