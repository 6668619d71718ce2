//! Errors raised while constructing the service client

use thiserror::Error;

/// Result type for client construction
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client construction errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The endpoint is not a usable http(s) URL
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// The region name cannot form a host name
    #[error("invalid region '{0}'")]
    InvalidRegion(String),

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    pub fn invalid_endpoint(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
