//! Runtime configuration for the scraper and the REST facade.
//!
//! Defaults target the live Sedgwick County site; `ROSTER_BASE_URL` and
//! `ROSTER_PORT` override them for testing against a local stand-in.

use std::time::Duration;
use url::Url;

/// Root of the inmate search application.
pub const DEFAULT_BASE_URL: &str = "https://ssc.sedgwickcounty.org/inmatesearch";

/// Default port for the REST facade.
pub const DEFAULT_PORT: u16 = 5000;

const GET_TIMEOUT: Duration = Duration::from_secs(15);
const POST_TIMEOUT: Duration = Duration::from_secs(20);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Scraper configuration: where to point and how long to wait.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the inmate search application (no trailing slash needed).
    pub base_url: Url,
    /// User-agent sent on every request.
    pub user_agent: String,
    /// Timeout for GET requests (form page, detail page).
    pub get_timeout: Duration,
    /// Timeout for the search POST, which is slower upstream.
    pub post_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            user_agent: USER_AGENT.to_string(),
            get_timeout: GET_TIMEOUT,
            post_timeout: POST_TIMEOUT,
        }
    }
}

impl Config {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("ROSTER_BASE_URL") {
            match Url::parse(&raw) {
                Ok(url) => config.base_url = url,
                Err(e) => tracing::warn!("ignoring invalid ROSTER_BASE_URL: {e}"),
            }
        }
        config
    }
}

/// Facade port: `ROSTER_PORT`, then `PORT`, then the default.
pub fn port_from_env() -> u16 {
    std::env::var("ROSTER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.get_timeout, Duration::from_secs(15));
        assert_eq!(config.post_timeout, Duration::from_secs(20));
    }
}
