//! Orchestrates publishing a closed issue as a content file.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::content::generate;
use crate::event::load_event;
use crate::issue::IssuePayload;
use crate::outcome::PublishOutcome;
use crate::paths::{resolve, OutputLocation};
use tracing::{info, info_span, Instrument};

/// Publishes the issue from a webhook event as a content file.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Loads the event payload and publishes its issue.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the payload cannot be loaded or publishing fails.
    pub async fn run(&self) -> Result<PublishOutcome, RunnerError> {
        info!(path = %self.config.event_path().display(), "Loading event");
        let event = load_event(self.config.event_path()).await?;

        match event.issue {
            Some(issue) => self.publish(issue).await,
            None => {
                info!("Event has no issue, nothing to publish");
                Ok(PublishOutcome::Skipped {
                    reason: "event has no issue".to_string(),
                })
            }
        }
    }

    /// Publishes a single issue.
    ///
    /// Issues that are not closed are skipped without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if no content folder is configured, the close
    /// timestamp is invalid or the file cannot be written.
    pub async fn publish(&self, issue: IssuePayload) -> Result<PublishOutcome, RunnerError> {
        let span = info_span!("publish", issue_number = issue.number);

        async {
            let Some(issue) = issue.into_closed() else {
                info!("Issue is not closed, nothing to publish");
                return Ok(PublishOutcome::Skipped {
                    reason: "issue is not closed".to_string(),
                });
            };

            let content_folder = self
                .config
                .content_folder()
                .ok_or(RunnerError::MissingContentFolder)?;
            let location = resolve(content_folder, &issue.closed_at, issue.number)?;
            let content = generate(&issue);

            info!(output_path = %location.output_path.display(), "Resolved output path");
            info!(content = %content, "Generated content");

            if self.config.dry_run() {
                info!("Dry run, not writing content");
                return Ok(PublishOutcome::DryRun { location, content });
            }

            write_content(&location, &content).await?;
            info!(output_path = %location.output_path.display(), "Content written");

            Ok(PublishOutcome::Written { location })
        }
        .instrument(span)
        .await
    }
}

/// Creates the output folder if needed and writes `content`, replacing any
/// existing file.
async fn write_content(location: &OutputLocation, content: &str) -> Result<(), RunnerError> {
    tokio::fs::create_dir_all(&location.output_folder)
        .await
        .map_err(|e| RunnerError::CreateFolder {
            path: location.output_folder.display().to_string(),
            source: e,
        })?;

    tokio::fs::write(&location.output_path, content)
        .await
        .map_err(|e| RunnerError::WriteFile {
            path: location.output_path.display().to_string(),
            source: e,
        })
}
