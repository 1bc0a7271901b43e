//! Webhook event payload loading.
//!
//! GitHub Actions writes the triggering event to the file named by
//! `GITHUB_EVENT_PATH`. Only the `issue` object is read from it.

mod error;

pub use error::EventError;

use crate::issue::{Issue, IssuePayload};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// The parts of a webhook event payload this crate uses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    /// Present for `issues` events.
    #[serde(default)]
    pub issue: Option<IssuePayload>,
}

impl EventPayload {
    /// Parses a payload from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the text is not a valid payload.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the payload's issue if it has been closed.
    #[must_use]
    pub fn closed_issue(self) -> Option<Issue> {
        self.issue.and_then(IssuePayload::into_closed)
    }
}

/// Loads the event payload from `path`.
///
/// # Errors
///
/// Returns [`EventError`] if the file cannot be read or parsed.
pub async fn load_event(path: &Path) -> Result<EventPayload, EventError> {
    debug!(path = %path.display(), "Loading event payload");

    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| EventError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

    EventPayload::from_json(&json).map_err(|e| EventError::JsonError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn payload_without_issue() {
        let payload = EventPayload::from_json(r#"{ "action": "push", "ref": "main" }"#).unwrap();

        assert!(payload.issue.is_none());
        assert!(payload.closed_issue().is_none());
    }

    #[test]
    fn payload_with_closed_issue() {
        let payload = EventPayload::from_json(
            r#"{
                "action": "closed",
                "issue": { "number": 3, "title": "Done", "closed_at": "2024-02-02T10:00:00Z" }
            }"#,
        )
        .unwrap();

        let issue = payload.closed_issue().unwrap();
        assert_eq!(issue.number, 3);
    }

    #[test]
    fn payload_with_wrong_types_is_rejected() {
        let result = EventPayload::from_json(r#"{ "issue": { "number": "three", "title": "x" } }"#);

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn load_missing_file() {
        let temp = TempDir::new().unwrap();

        let result = load_event(&temp.path().join("event.json")).await;
        assert!(matches!(result, Err(EventError::IoError { .. })));
    }

    #[tokio::test]
    async fn load_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("event.json");
        std::fs::write(&path, "not json").unwrap();

        let result = load_event(&path).await;
        assert!(matches!(result, Err(EventError::JsonError { .. })));
    }
}
