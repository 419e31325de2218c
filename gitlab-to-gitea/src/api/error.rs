//! Remote API error types.

use thiserror::Error;

/// Errors returned by the GitLab and Gitea clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the token.
    #[error("Authentication failed for {url} (HTTP {status})")]
    Unauthorized { url: String, status: u16 },

    /// The requested resource does not exist.
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// Any other non-success status.
    #[error("Unexpected HTTP {status} from {url}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("Invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured server URL is unusable.
    #[error("Invalid server URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl ApiError {
    /// Returns the HTTP status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Status { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Decode { .. } | Self::InvalidUrl { .. } => None,
        }
    }
}
