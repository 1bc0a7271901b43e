//! Publish outcome types.

use crate::paths::OutputLocation;
use std::path::Path;

/// Result of processing a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The content file was written.
    Written {
        /// Where the file was written.
        location: OutputLocation,
    },

    /// Content was generated but nothing was written.
    DryRun {
        /// Where the file would be written.
        location: OutputLocation,
        /// Generated file content.
        content: String,
    },

    /// There was nothing to publish.
    Skipped {
        /// Reason for skipping.
        reason: String,
    },
}

impl PublishOutcome {
    /// Returns the content file path, if one was resolved.
    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        match self {
            Self::Written { location } | Self::DryRun { location, .. } => {
                Some(&location.output_path)
            }
            Self::Skipped { .. } => None,
        }
    }

    /// Returns true if a file was written.
    #[must_use]
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn location() -> OutputLocation {
        OutputLocation {
            output_folder: PathBuf::from("blog/2023/12/1"),
            output_path: PathBuf::from("blog/2023/12/1/123.md"),
        }
    }

    #[test]
    fn written_reports_path() {
        let outcome = PublishOutcome::Written {
            location: location(),
        };

        assert_eq!(
            outcome.output_path(),
            Some(Path::new("blog/2023/12/1/123.md"))
        );
        assert!(outcome.is_written());
    }

    #[test]
    fn skipped_reports_nothing() {
        let outcome = PublishOutcome::Skipped {
            reason: "issue is not closed".to_string(),
        };

        assert!(outcome.output_path().is_none());
        assert!(!outcome.is_written());
    }
}
