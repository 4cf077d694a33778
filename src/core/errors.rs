//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Provider answered with a non-success status
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status returned by the provider
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded. Retry after {retry_after:?} seconds")]
    RateLimitError {
        /// Seconds from the `Retry-After` header
        retry_after: Option<u64>,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport failure detail
        message: String,
    },

    /// Invalid response from provider
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// What was wrong with the body
        message: String,
    },

    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Which setting is invalid
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TranslationError {
    /// Whether another attempt against the provider could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            TranslationError::ApiError { status, .. } => *status >= 500,
            TranslationError::RateLimitError { .. }
            | TranslationError::NetworkError { .. }
            | TranslationError::InvalidResponseError { .. }
            | TranslationError::TimeoutError
            | TranslationError::HttpError(_) => true,
            TranslationError::ConfigError { .. }
            | TranslationError::IoError(_)
            | TranslationError::JsonError(_) => false,
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
