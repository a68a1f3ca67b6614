//! Error types for imgpull-fetch.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid source URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("transfer from '{url}' failed: {source}")]
    Transfer {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("'{url}' answered with HTTP status {status}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    /// `true` when the source string itself was unusable and no connection
    /// was attempted.
    pub fn is_invalid_source(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. })
    }

    pub fn url(&self) -> &str {
        match self {
            Self::InvalidUrl { url, .. } | Self::Transfer { url, .. } | Self::Status { url, .. } => url,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
