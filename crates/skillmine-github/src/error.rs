//! Error types for the hosting API client.

use thiserror::Error;

/// Hosting API errors
#[derive(Debug, Error)]
pub enum HostError {
    /// Non-success HTTP status
    #[error("HTTP {status} on {url} :: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
        /// Response body, truncated
        body: String,
    },

    /// Connection error (network, DNS, timeout, etc.)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid client configuration (base URL, credentials)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Resource unknown to an in-memory host
    #[error("Not found: {0}")]
    NotFound(String),
}

impl HostError {
    /// True for 401 and 403, the statuses that trigger the public listing fallback
    pub fn is_access_denied(&self) -> bool {
        matches!(self, HostError::Status { status: 401 | 403, .. })
    }
}

impl From<reqwest::Error> for HostError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            HostError::Connection(e.to_string())
        } else if e.is_decode() {
            HostError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            HostError::Status {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
                body: String::new(),
            }
        } else {
            HostError::Connection(e.to_string())
        }
    }
}

impl From<serde_json::Error> for HostError {
    fn from(e: serde_json::Error) -> Self {
        HostError::Decode(format!("JSON parsing error: {}", e))
    }
}
