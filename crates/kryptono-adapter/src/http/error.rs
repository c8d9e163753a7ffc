/*
[INPUT]:  Error sources (transport, status, decode, encode, configuration)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Kryptono adapter
#[derive(Error, Debug)]
pub enum KryptonoError {
    /// The underlying send failed (network, DNS, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response status was not one the operation accepts
    #[error("unexpected HTTP status {actual} (expected {expected:?}): {body}")]
    UnexpectedStatus {
        expected: Vec<u16>,
        actual: u16,
        body: String,
    },

    /// Response body was not valid JSON or did not match the expected shape
    #[error("failed to decode response at `{path}`: {message}")]
    Decode { path: String, message: String },

    /// Request value could not be serialized
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KryptonoError {
    /// Check if the error came from the transport rather than the exchange
    pub fn is_transport_error(&self) -> bool {
        matches!(self, KryptonoError::Http(_))
    }

    /// HTTP status returned by the exchange, if the failure carried one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            KryptonoError::UnexpectedStatus { actual, .. } => Some(*actual),
            KryptonoError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn decode(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        KryptonoError::Decode {
            path,
            message: err.into_inner().to_string(),
        }
    }
}

/// Result type alias for Kryptono operations
pub type Result<T> = std::result::Result<T, KryptonoError>;
