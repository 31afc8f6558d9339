//! The remote translation capability.

use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by a [`Translator`].
#[derive(Debug, Error)]
pub enum TranslateError {
    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request never got a response (DNS, TLS, timeout, reset...).
    #[error("Connection to '{endpoint}' failed: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Provider answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse completion response: {0}")]
    Parse(String),

    #[error("Completion response contained no choices")]
    EmptyResponse,

    /// Used by in-process translators that fail for their own reasons.
    #[error("{0}")]
    Other(String),
}

/// Sends one instruction + text pair to a model and returns its reply.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, instruction: &str, text: &str) -> Result<String, TranslateError>;
}
