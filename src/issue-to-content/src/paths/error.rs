//! Path resolution error types.

use thiserror::Error;

/// Errors that can occur while resolving an output location.
#[derive(Debug, Error)]
pub enum PathError {
    /// The close timestamp is not a valid RFC 3339 instant.
    #[error("Invalid close timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
