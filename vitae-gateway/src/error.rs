//! Gateway error types.

use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that can occur when persisting a section order.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GatewayError {
    /// Returns true if this error represents a 429 rate-limit response.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            GatewayError::RateLimited { .. } => true,
            GatewayError::Api { status, .. } => *status == 429,
            GatewayError::Http(e) => e.status().is_some_and(|s| s.as_u16() == 429),
            _ => false,
        }
    }

    /// Returns the retry-after duration if this is a rate-limit error.
    pub fn retry_after(&self) -> Option<std::time::Duration> {
        match self {
            GatewayError::RateLimited { retry_after_secs } => {
                Some(std::time::Duration::from_secs(*retry_after_secs))
            }
            _ => None,
        }
    }
}
