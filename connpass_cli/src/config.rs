//! Runtime configuration: flags first, then environment (including `.env`).

use std::time::Duration;

use anyhow::{Context, Result};
use connpass_api::Client;

const BASE_URL_ENV: &str = "CONNPASS_BASE_URL";
const TIMEOUT_ENV: &str = "CONNPASS_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// API host; `None` uses the production endpoint.
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Config {
    /// Resolves configuration from command-line overrides and the process environment.
    pub fn load(base_url: Option<&str>, timeout_secs: Option<u64>) -> Result<Self> {
        Self::resolve(
            base_url,
            timeout_secs,
            std::env::var(BASE_URL_ENV).ok(),
            std::env::var(TIMEOUT_ENV).ok(),
        )
    }

    fn resolve(
        base_url: Option<&str>,
        timeout_secs: Option<u64>,
        env_base_url: Option<String>,
        env_timeout: Option<String>,
    ) -> Result<Self> {
        let base_url = base_url
            .map(|s| s.to_string())
            .or(env_base_url)
            .filter(|s| !s.trim().is_empty());
        let timeout_secs = match timeout_secs {
            Some(secs) => secs,
            None => match env_timeout {
                Some(raw) => raw
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("{} must be a whole number of seconds", TIMEOUT_ENV))?,
                None => connpass_api::DEFAULT_TIMEOUT.as_secs(),
            },
        };
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn client(&self) -> Client {
        let client = match &self.base_url {
            Some(url) => Client::with_base_url(url),
            None => Client::new(),
        };
        client.with_timeout(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production() {
        let config = Config::resolve(None, None, None, None).unwrap();
        assert_eq!(config.base_url, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.client().base_url(), "https://connpass.com");
    }

    #[test]
    fn flags_override_environment() {
        let config = Config::resolve(
            Some("http://localhost:1234"),
            Some(5),
            Some("http://env.example".to_string()),
            Some("60".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:1234"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn environment_fills_missing_flags() {
        let config = Config::resolve(
            None,
            None,
            Some("http://env.example/".to_string()),
            Some(" 60 ".to_string()),
        )
        .unwrap();
        assert_eq!(config.client().base_url(), "http://env.example");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn blank_base_url_is_ignored() {
        let config = Config::resolve(None, None, Some("  ".to_string()), None).unwrap();
        assert_eq!(config.base_url, None);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = Config::resolve(None, None, None, Some("soon".to_string())).unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_ENV));
    }
}
