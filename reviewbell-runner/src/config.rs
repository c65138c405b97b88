//! Runner configuration
//!
//! Defines every configurable parameter of the notifier: credentials for
//! the status endpoint and the messaging API, the recipient, and the
//! polling cadence.

use std::time::Duration;
use tracing::error;

use reviewbell_core::domain::Cursor;

/// Default status endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default Bot API base URL
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Notifier configuration
///
/// Built once at startup and handed to the clients and the poller.
#[derive(Clone)]
pub struct Config {
    /// Credential for the status endpoint
    pub practicum_token: String,

    /// Bot credential for the messaging API
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Status endpoint URL
    pub endpoint: String,

    /// Bot API base URL
    pub telegram_api_url: String,

    /// Pause between two poll cycles
    pub retry_period: Duration,

    /// Upper bound for a single HTTP request
    pub request_timeout: Duration,

    /// Initial cursor; current time when unset
    pub from_date: Option<i64>,
}

impl Config {
    /// Creates a configuration with defaults for everything but the secrets
    pub fn new(
        practicum_token: String,
        telegram_token: String,
        telegram_chat_id: String,
    ) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            retry_period: Duration::from_secs(600), // 10 minutes
            request_timeout: Duration::from_secs(30),
            from_date: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    /// - FROM_DATE (optional, unix seconds, default: now)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).unwrap_or_default();
        let seconds = |key: &str| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
        };

        let mut config = Self::new(
            var("PRACTICUM_TOKEN"),
            var("TELEGRAM_TOKEN"),
            var("TELEGRAM_CHAT_ID"),
        );

        if let Some(endpoint) = lookup("PRACTICUM_ENDPOINT").filter(|s| !s.is_empty()) {
            config.endpoint = endpoint;
        }
        if let Some(api_url) = lookup("TELEGRAM_API_URL").filter(|s| !s.is_empty()) {
            config.telegram_api_url = api_url;
        }
        if let Some(retry_period) = seconds("RETRY_PERIOD") {
            config.retry_period = retry_period;
        }
        if let Some(request_timeout) = seconds("REQUEST_TIMEOUT") {
            config.request_timeout = request_timeout;
        }
        config.from_date = lookup("FROM_DATE").and_then(|s| s.trim().parse::<i64>().ok());

        config.validate()?;
        Ok(config)
    }

    /// Required values, by environment variable name
    fn required(&self) -> [(&'static str, &str); 3] {
        [
            ("PRACTICUM_TOKEN", self.practicum_token.as_str()),
            ("TELEGRAM_TOKEN", self.telegram_token.as_str()),
            ("TELEGRAM_CHAT_ID", self.telegram_chat_id.as_str()),
        ]
    }

    /// Names of required values that are missing or blank
    pub fn missing(&self) -> Vec<&'static str> {
        self.required()
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Cursor the poller starts from
    pub fn initial_cursor(&self) -> Cursor {
        self.from_date.map(Cursor::new).unwrap_or_else(Cursor::now)
    }

    /// Validates the configuration
    ///
    /// Every missing required value is logged by name before failing.
    pub fn validate(&self) -> anyhow::Result<()> {
        let missing = self.missing();
        if !missing.is_empty() {
            for name in &missing {
                error!("Missing required environment variable: {}", name);
            }
            anyhow::bail!(
                "missing required environment variables: {}",
                missing.join(", ")
            );
        }

        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.retry_period.as_secs() == 0 {
            anyhow::bail!("retry_period must be greater than 0");
        }

        if self.request_timeout.as_secs() == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("request_timeout", &self.request_timeout)
            .field("from_date", &self.from_date)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("PRACTICUM_TOKEN", "p-token"),
        ("TELEGRAM_TOKEN", "t-token"),
        ("TELEGRAM_CHAT_ID", "42"),
    ];

    #[test]
    fn test_defaults_from_required_only() {
        let config = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();
        assert_eq!(config.practicum_token, "p-token");
        assert_eq!(config.telegram_chat_id, "42");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.from_date, None);
    }

    #[test]
    fn test_optional_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("RETRY_PERIOD", "60"),
            ("REQUEST_TIMEOUT", "5"),
            ("FROM_DATE", "1549962000"),
            ("PRACTICUM_ENDPOINT", "http://localhost:9000/statuses/"),
            ("TELEGRAM_API_URL", "http://localhost:9001"),
        ]);

        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.retry_period, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.initial_cursor(), Cursor::new(1549962000));
        assert_eq!(config.endpoint, "http://localhost:9000/statuses/");
        assert_eq!(config.telegram_api_url, "http://localhost:9001");
    }

    #[test]
    fn test_unparseable_optional_falls_back_to_default() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("RETRY_PERIOD", "often"));

        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.retry_period, Duration::from_secs(600));
    }

    #[test]
    fn test_missing_required_values_are_named() {
        let err = Config::from_lookup(lookup_from(&[("TELEGRAM_TOKEN", "t-token")])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("PRACTICUM_TOKEN"));
        assert!(message.contains("TELEGRAM_CHAT_ID"));
        assert!(!message.contains("TELEGRAM_TOKEN"));
    }

    #[test]
    fn test_blank_required_value_counts_as_missing() {
        let config = Config::new("p".to_string(), "   ".to_string(), "42".to_string());
        assert_eq!(config.missing(), vec!["TELEGRAM_TOKEN"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new("p".to_string(), "t".to_string(), "42".to_string());
        assert!(config.validate().is_ok());

        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.endpoint = DEFAULT_ENDPOINT.to_string();

        config.retry_period = Duration::from_secs(0);
        assert!(config.validate().is_err());
        config.retry_period = Duration::from_secs(1);

        config.request_timeout = Duration::from_millis(10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = Config::new("p-secret".to_string(), "t-secret".to_string(), "42".to_string());
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("42"));
    }
}
