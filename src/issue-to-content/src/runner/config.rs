//! Runner configuration.

use std::path::{Path, PathBuf};

/// Configuration for publishing an issue event.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the webhook event payload.
    event_path: PathBuf,
    /// Root folder content files are written under.
    ///
    /// Only required once a closed issue is published.
    content_folder: Option<PathBuf>,
    /// Whether to generate content without writing it.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(event_path: PathBuf) -> Self {
        Self {
            event_path,
            content_folder: None,
            dry_run: false,
        }
    }

    /// Sets the content folder.
    pub fn with_content_folder(mut self, content_folder: PathBuf) -> Self {
        self.content_folder = Some(content_folder);
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the event payload path.
    pub fn event_path(&self) -> &Path {
        &self.event_path
    }

    /// Returns the content folder, if configured.
    pub fn content_folder(&self) -> Option<&Path> {
        self.content_folder.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
