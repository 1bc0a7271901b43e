//! Event payload error types.

use thiserror::Error;

/// Errors that can occur while loading the webhook event payload.
#[derive(Debug, Error)]
pub enum EventError {
    /// Failed to read the payload file.
    #[error("Failed to read event payload '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not valid JSON or has unexpected field types.
    #[error("Failed to parse event payload '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
