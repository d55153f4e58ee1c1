//! Error types for the coin price client

use thiserror::Error;

/// Failures of a latest-tick request, from transport up to payload shape
///
/// Controllers never surface these; they log them and raise `show_error`.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP client could not reach CoinDesk or read the body
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Body was not a latest-tick payload, or carried no usable record
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// CoinDesk answered 429
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Instrument name is not one of the supported symbols
    #[error("Asset not supported: {0}")]
    UnsupportedAsset(String),

    /// Any other non-2xx status, with the status line and body
    #[error("Provider API error: {0}")]
    ApiError(String),

    /// Request exceeded `REQUEST_TIMEOUT_SECS`
    #[error("Request timeout")]
    Timeout,
}

impl ProviderError {
    /// Classifies a transport error, separating timeouts from other failures
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::NetworkError(error)
        }
    }

    /// Creates an InvalidResponse error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Creates an UnsupportedAsset error
    pub fn unsupported_asset(name: &str) -> Self {
        Self::UnsupportedAsset(name.to_string())
    }
}
