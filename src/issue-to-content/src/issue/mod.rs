//! Issue records read from the webhook payload.
//!
//! [`IssuePayload`] mirrors the `issue` object GitHub sends with an `issues`
//! event. Only closed issues are published, so the rest of the crate works
//! with [`Issue`], which is only obtainable through
//! [`IssuePayload::into_closed`].

mod label;

pub use label::Label;

use serde::Deserialize;

/// The `issue` object of a webhook payload.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuePayload {
    /// Issue number within the repository.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Raw close timestamp, `None` while the issue is open.
    #[serde(default)]
    pub closed_at: Option<String>,

    /// Markdown body, absent when the issue was opened without one.
    #[serde(default)]
    pub body: Option<String>,

    /// Labels in the order GitHub reports them.
    #[serde(default, deserialize_with = "label::deserialize_labels")]
    pub labels: Vec<Label>,
}

impl IssuePayload {
    /// Converts the payload into a publishable [`Issue`].
    ///
    /// Returns `None` when the issue has not been closed.
    #[must_use]
    pub fn into_closed(self) -> Option<Issue> {
        let closed_at = self.closed_at?;
        Some(Issue {
            number: self.number,
            title: self.title,
            closed_at,
            body: self.body,
            labels: self.labels,
        })
    }
}

/// A closed issue, ready to be turned into a content file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Issue number, used as the output file name.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Close timestamp exactly as received; emitted verbatim as the `date`.
    pub closed_at: String,

    /// Markdown body.
    pub body: Option<String>,

    /// Labels, emitted as `tags`.
    pub labels: Vec<Label>,
}

impl Issue {
    /// Iterates over the label names in order.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.name.as_str())
    }
}
