//! Action reporting error types.

use thiserror::Error;

/// Errors that can occur while reporting action results.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to append to the output file.
    #[error("Failed to write action output to '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The value contains the heredoc delimiter and cannot be written safely.
    #[error("Output '{name}' contains the reserved delimiter")]
    DelimiterCollision { name: String },
}
