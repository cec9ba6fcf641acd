use anyhow::{Context, Result};

/// Runtime configuration, read once at startup from the process environment.
///
/// The secrets are optional on purpose: the server still starts without them
/// so that `/health` can report which ones are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token (`TELEGRAM_BOT_TOKEN`).
    pub bot_token: Option<String>,
    /// Target channel, e.g. `@my_channel` or a numeric chat id (`TELEGRAM_CHANNEL_ID`).
    pub channel_id: Option<String>,
    /// NASA API key (`NASA_API_KEY`).
    pub nasa_api_key: Option<String>,
    /// HTTP listen port (`PORT`).
    pub port: u16,
    /// Default log directive when `RUST_LOG` is not set (`LOG_LEVEL`).
    pub log_level: String,
    /// Directory for daily-rotated log files (`LOG_DIR`); stdout-only when unset.
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_token: None,
            channel_id: None,
            nasa_api_key: None,
            port: default_port(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bot_token: optional("TELEGRAM_BOT_TOKEN"),
            channel_id: optional("TELEGRAM_CHANNEL_ID"),
            nasa_api_key: optional("NASA_API_KEY"),
            port: parse_port(optional("PORT"))?,
            log_level: optional("LOG_LEVEL").unwrap_or_else(default_log_level),
            log_dir: optional("LOG_DIR"),
        })
    }

    /// Names of the secret variables that are still unset, in the order the
    /// operator should provide them.
    pub fn missing_secrets(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.bot_token.is_none() {
            missing.push("TELEGRAM_BOT_TOKEN");
        }
        if self.channel_id.is_none() {
            missing.push("TELEGRAM_CHANNEL_ID");
        }
        if self.nasa_api_key.is_none() {
            missing.push("NASA_API_KEY");
        }
        missing
    }
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(non_empty)
}

/// An empty value is treated the same as an unset variable.
fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        None => Ok(default_port()),
        Some(raw) => raw
            .parse()
            .with_context(|| format!("PORT must be a number, got {raw:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_to_3000() {
        assert_eq!(parse_port(None).unwrap(), 3000);
    }

    #[test]
    fn port_parses_numeric_values() {
        assert_eq!(parse_port(Some("8080".to_string())).unwrap(), 8080);
    }

    #[test]
    fn port_rejects_garbage() {
        let err = parse_port(Some("eighty".to_string())).unwrap_err();
        assert!(err.to_string().contains("PORT must be a number"));
    }

    #[test]
    fn empty_values_count_as_unset() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("x".to_string()), Some("x".to_string()));
    }

    #[test]
    fn missing_secrets_lists_unset_variables() {
        let config = Config::default();
        assert_eq!(
            config.missing_secrets(),
            vec!["TELEGRAM_BOT_TOKEN", "TELEGRAM_CHANNEL_ID", "NASA_API_KEY"]
        );
    }

    #[test]
    fn missing_secrets_is_empty_when_configured() {
        let config = Config {
            bot_token: Some("123456:token".to_string()),
            channel_id: Some("@channel".to_string()),
            nasa_api_key: Some("DEMO_KEY".to_string()),
            ..Config::default()
        };
        assert!(config.missing_secrets().is_empty());
    }
}
