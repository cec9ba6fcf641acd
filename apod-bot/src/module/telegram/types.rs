///! Telegram Bot API response types

use serde::Deserialize;

/// Envelope every Bot API method call comes back in.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    /// Present when `ok` is true.
    #[serde(default)]
    pub result: Option<SentMessage>,
    /// Present when `ok` is false.
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The message Telegram created for us. Only the id is kept; the rest of
/// the `Message` object is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
}
