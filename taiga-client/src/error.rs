//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the catalog endpoint
    #[error("HTTP {status}")]
    Status { status: u16 },

    /// Response body was not a product list
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Single user-visible message for a failed catalog load. The catalog is
    /// left empty and nothing retries; this is all the shopper sees.
    pub fn user_message(&self) -> String {
        format!("Failed to load products\n{}", self)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
