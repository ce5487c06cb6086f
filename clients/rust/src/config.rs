use std::time::Duration;
use tracing::warn;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Configuration surface for the remote collection endpoint.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base url of the hosted collection, for example
    /// `https://<project>.mockapi.io/api/v1`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Configured retry budget. Request execution is single-shot and does
    /// not consume this anywhere yet.
    pub retry_attempts: u32,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = std::env::var("API_BASE_URL").unwrap_or_default();

        let timeout_ms = match std::env::var("API_TIMEOUT_MS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(ms) => ms,
                Err(_) => {
                    warn!(
                        "The given API_TIMEOUT_MS: {} is not valid, falling back to the default: {}.",
                        raw, DEFAULT_TIMEOUT_MS
                    );
                    DEFAULT_TIMEOUT_MS
                }
            },
            Err(_) => DEFAULT_TIMEOUT_MS,
        };

        let retry_attempts = match std::env::var("API_RETRY_ATTEMPTS") {
            Ok(raw) => match raw.parse::<u32>() {
                Ok(attempts) => attempts,
                Err(_) => {
                    warn!(
                        "The given API_RETRY_ATTEMPTS: {} is not valid, falling back to the default: {}.",
                        raw, DEFAULT_RETRY_ATTEMPTS
                    );
                    DEFAULT_RETRY_ATTEMPTS
                }
            },
            Err(_) => DEFAULT_RETRY_ATTEMPTS,
        };

        Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
            retry_attempts,
        }
    }

    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
        }
    }

    /// Whether the base url points at a real project instead of the
    /// placeholder shipped with the original config template.
    pub fn is_configured(&self) -> bool {
        !(self.base_url.is_empty()
            || self.base_url.contains("your-mockapi-id")
            || self.base_url.contains("SEU-ID-AQUI"))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn it_falls_back_to_defaults() {
        std::env::remove_var("API_BASE_URL");
        std::env::remove_var("API_TIMEOUT_MS");
        std::env::remove_var("API_RETRY_ATTEMPTS");

        let config = ApiConfig::new();
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert_eq!(config.retry_attempts, DEFAULT_RETRY_ATTEMPTS);
        assert!(!config.is_configured());
    }

    #[test]
    #[serial]
    fn it_reads_the_environment() {
        std::env::set_var("API_BASE_URL", "https://abc123.mockapi.io/api/v1");
        std::env::set_var("API_TIMEOUT_MS", "2500");
        std::env::set_var("API_RETRY_ATTEMPTS", "5");

        let config = ApiConfig::new();
        assert_eq!(config.base_url, "https://abc123.mockapi.io/api/v1");
        assert_eq!(config.timeout, Duration::from_millis(2500));
        assert_eq!(config.retry_attempts, 5);
        assert!(config.is_configured());

        std::env::remove_var("API_BASE_URL");
        std::env::remove_var("API_TIMEOUT_MS");
        std::env::remove_var("API_RETRY_ATTEMPTS");
    }

    #[test]
    #[serial]
    fn it_ignores_malformed_numbers() {
        std::env::set_var("API_TIMEOUT_MS", "soon");
        std::env::set_var("API_RETRY_ATTEMPTS", "-1");

        let config = ApiConfig::new();
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
        assert_eq!(config.retry_attempts, DEFAULT_RETRY_ATTEMPTS);

        std::env::remove_var("API_TIMEOUT_MS");
        std::env::remove_var("API_RETRY_ATTEMPTS");
    }

    #[test]
    #[serial]
    fn it_spots_the_placeholder_url() {
        let config = ApiConfig::with_base_url("https://your-mockapi-id.mockapi.io/api/v1");
        assert!(!config.is_configured());
    }
}
