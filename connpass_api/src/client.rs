//! HTTP client for the connpass event search API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{EventQuery, Query},
    types::ResultSet,
    Error,
};

const DEFAULT_BASE_URL: &str = "https://connpass.com";
const EVENT_PATH: &str = "/api/v1/event/";

/// Request timeout applied unless overridden with [`Client::with_timeout`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the connpass API.
///
/// Holds configuration only. Each request builds a fresh `reqwest::Client`,
/// sends a single GET, and consumes the whole response before returning.
/// Nothing is retried or cached.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API. Defaults to `https://connpass.com`.
    base_api_url: String,
    timeout: Duration,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production connpass API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidBaseUrl {
                base_url: self.base_api_url.clone(),
                source: e,
            }
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder()
            .user_agent(concat!("connpass_api/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Transport(e)
            })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Body(e)
        })?;

        let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&String::from_utf8_lossy(&body));
            tracing::error!(
                "Failed to parse resource (status {}): {} | body: {}",
                status,
                e,
                snippet
            );
            Error::Decode {
                status: status.as_u16(),
                body: snippet,
                source: e,
            }
        })?;

        Ok(parsed)
    }

    /// Returns the URL that [`Client::search`] would fetch for `query`.
    pub fn event_url(&self, query: &EventQuery) -> Result<Url, Error> {
        self.get_url(EVENT_PATH, query)
    }

    /// Fetches one page of events matching the given query.
    pub async fn search(&self, query: &EventQuery) -> Result<ResultSet, Error> {
        self.get::<ResultSet, EventQuery>(EVENT_PATH, query)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
