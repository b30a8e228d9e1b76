//! Error types for the third-party API clients.

use thiserror::Error;

/// Ways an upstream call can fail.
///
/// Handlers never expose the variant; it only reaches the logs.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, DNS, TLS or timeout failure
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {0}")]
    Status(u16),

    /// Body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Random user envelope carried no results
    #[error("Upstream returned no results")]
    EmptyResults,
}
