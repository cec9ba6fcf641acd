///! NASA "Astronomy Picture of the Day" module
///!
///! Fetches the daily entry from the NASA open API and exposes it as a
///! typed record for the poster.

pub mod fetcher;
pub mod types;

pub use fetcher::{ApodFetcher, FetchError};
pub use types::ApodRecord;
