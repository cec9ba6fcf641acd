///! NASA APOD data types

use chrono::NaiveDate;
use serde::Deserialize;

/// One "Astronomy Picture of the Day" entry as returned by the NASA API.
///
/// The API sends more fields (`media_type`, `service_version`, `copyright`);
/// only the ones needed for the channel post are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct ApodRecord {
    /// Picture title.
    pub title: String,
    /// Publication date, ISO `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Long-form description of the picture.
    pub explanation: String,
    /// Standard-resolution media URL. Always present.
    pub url: String,
    /// High-resolution image URL. Absent on video days.
    #[serde(default)]
    pub hdurl: Option<String>,
}

impl ApodRecord {
    /// URL to publish: the HD variant when NASA provides one.
    pub fn image_url(&self) -> &str {
        self.hdurl.as_deref().unwrap_or(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(hdurl: Option<&str>) -> ApodRecord {
        ApodRecord {
            title: "Saturn at Opposition".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 23).unwrap(),
            explanation: "Saturn reaches opposition tonight.".to_string(),
            url: "https://apod.nasa.gov/apod/image/saturn_1024.jpg".to_string(),
            hdurl: hdurl.map(str::to_string),
        }
    }

    #[test]
    fn image_url_prefers_hdurl() {
        let record = sample(Some("https://apod.nasa.gov/apod/image/saturn_4096.jpg"));
        assert_eq!(
            record.image_url(),
            "https://apod.nasa.gov/apod/image/saturn_4096.jpg"
        );
    }

    #[test]
    fn image_url_falls_back_to_url() {
        let record = sample(None);
        assert_eq!(
            record.image_url(),
            "https://apod.nasa.gov/apod/image/saturn_1024.jpg"
        );
    }

    #[test]
    fn deserializes_the_nasa_response_shape() {
        let body = r#"{
            "copyright": "Nobody",
            "date": "2026-08-23",
            "explanation": "Saturn reaches opposition tonight.",
            "hdurl": "https://apod.nasa.gov/apod/image/saturn_4096.jpg",
            "media_type": "image",
            "service_version": "v1",
            "title": "Saturn at Opposition",
            "url": "https://apod.nasa.gov/apod/image/saturn_1024.jpg"
        }"#;
        let record: ApodRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.title, "Saturn at Opposition");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 8, 23).unwrap());
        assert_eq!(
            record.hdurl.as_deref(),
            Some("https://apod.nasa.gov/apod/image/saturn_4096.jpg")
        );
    }

    #[test]
    fn hdurl_is_optional() {
        let body = r#"{
            "date": "2026-08-23",
            "explanation": "A video day.",
            "media_type": "video",
            "title": "Comet Flyby",
            "url": "https://www.youtube.com/embed/xyz"
        }"#;
        let record: ApodRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.hdurl, None);
        assert_eq!(record.image_url(), "https://www.youtube.com/embed/xyz");
    }
}
