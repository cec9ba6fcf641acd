///! Integration modules: the NASA APOD fetcher, the Telegram publisher,
///! and the poster that orchestrates one republish cycle.

pub mod apod;
pub mod poster;
pub mod telegram;
