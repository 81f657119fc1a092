//! Error types for authenticated repository requests

use thiserror::Error;

/// Authentication and request errors
#[derive(Debug, Error)]
pub enum AuthError {
    // ============ Configuration Errors ============
    #[error("Repository not found: {name}")]
    RepositoryNotFound { name: String },

    #[error("Invalid repository URL: {url} - {reason}")]
    InvalidRepositoryUrl { url: String, reason: String },

    #[error("Invalid request URL: {url} - {reason}")]
    InvalidRequestUrl { url: String, reason: String },

    // ============ Network Errors ============
    #[error("HTTP status error: {status} for {url}")]
    Status {
        status: u16,
        url: String,
        body: Vec<u8>,
    },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Request timeout after {seconds}s")]
    Timeout { seconds: u64 },

    // ============ Header Errors ============
    #[error("Invalid header value for {name}: {message}")]
    InvalidHeader { name: String, message: String },

    // ============ Other ============
    #[error("{0}")]
    Other(String),
}

impl AuthError {
    /// Status code carried by this error, if it came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AuthError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body carried by this error, if it came from an HTTP response.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            AuthError::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AuthError::Timeout { seconds: 30 }
        } else if e.is_connect() {
            AuthError::Network {
                message: format!("Connection failed: {}", e),
            }
        } else {
            AuthError::Network {
                message: e.to_string(),
            }
        }
    }
}

impl From<url::ParseError> for AuthError {
    fn from(e: url::ParseError) -> Self {
        AuthError::InvalidRequestUrl {
            url: String::new(),
            reason: e.to_string(),
        }
    }
}
