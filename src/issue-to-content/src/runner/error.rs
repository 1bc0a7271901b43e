//! Runner error types.

/// Errors that can occur while publishing an issue.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Event payload loading errors.
    #[error(transparent)]
    Event(#[from] crate::event::EventError),

    /// A closed issue was found but no content folder is configured.
    #[error("Input required and not supplied: contentFolder")]
    MissingContentFolder,

    /// Output location errors.
    #[error(transparent)]
    Path(#[from] crate::paths::PathError),

    /// Failed to create the output folder.
    #[error("Failed to create folder '{path}': {source}")]
    CreateFolder {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the content file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
