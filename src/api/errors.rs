//! Client error taxonomy

use thiserror::Error;

/// Everything that can go wrong while talking to the timer service
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Service at {url} returned HTTP {status}")]
    Server { url: String, status: u16 },

    #[error("Unexpected response body from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::InvalidBaseUrl { .. } => "client.invalid_base_url",
            ClientError::ClientBuild(_) => "client.build_failed",
            ClientError::Network { .. } => "client.network_failure",
            ClientError::Server { .. } => "client.server_error",
            ClientError::Malformed { .. } => "client.malformed_response",
        }
    }

    /// Failures that the next scheduled poll may clear up on its own
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ClientError::Network { .. } | ClientError::Server { .. } | ClientError::Malformed { .. }
        )
    }
}
