//! Failures reported by remote service clients.

use thiserror::Error;

/// A remote call did not produce the expected response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// The service answered with a non-success status
    #[error("status code {status}, {message}")]
    Status { status: u16, message: String },

    /// The request never completed (DNS, TLS, timeout, connection reset)
    #[error("request failed: {0}")]
    Transport(String),

    /// The response arrived but could not be understood
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl RemoteError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        RemoteError::Status {
            status,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// The service rejected the request as semantically invalid (HTTP 422),
    /// which is how "already exists" is reported for git references.
    pub fn is_unprocessable(&self) -> bool {
        self.status_code() == Some(422)
    }
}
