//! Errors raised while talking to the REST API or the geocoder.

use thiserror::Error;

/// Failure of a single request/response round trip.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, CORS, timeout).
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not the JSON shape we expected.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A base URL from configuration could not be parsed.
    #[error("invalid url: {0}")]
    Url(String),
}
