//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured base URL could not be combined into a request URL.
    #[error("Invalid base URL {base_url:?}")]
    InvalidBaseUrl {
        base_url: String,
        #[source]
        source: url::ParseError,
    },
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("Request failed")]
    Transport(#[source] reqwest::Error),
    /// The response body could not be read to the end.
    #[error("Failed to read response body")]
    Body(#[source] reqwest::Error),
    /// The response body was not a valid result set.
    #[error("Failed to decode response (status {status})")]
    Decode {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}
