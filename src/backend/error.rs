//! Backend transport errors.

use thiserror::Error;

/// Failure of an outbound backend call.
///
/// Route handlers only branch on Ok/Err; the variants exist so the
/// failure can be logged with its cause at the client boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out")]
    Timeout,

    #[error("backend returned HTTP {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    InvalidBody(String),

    #[error("request failed: {0}")]
    Other(String),
}

impl TransportError {
    /// Classify a reqwest error into a transport failure.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}
