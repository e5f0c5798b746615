//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error — the only error type returned by adapter operations.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Any failure talking to the relayer. The transport cause is dropped.
    #[error("Standard Relayer API request failed")]
    RemoteService,
}

/// HTTP-layer errors produced by a [`RelayerApi`](crate::http::RelayerApi)
/// implementation.
///
/// Internal detail: the adapter collapses every variant into
/// [`SdkError::RemoteService`].
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for HttpError {
    fn from(e: serde_json::Error) -> Self {
        HttpError::Decode(e.to_string())
    }
}
