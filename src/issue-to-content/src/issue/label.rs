//! Issue label records.

use serde::{Deserialize, Deserializer};

/// A label attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    /// Label name, emitted as a tag.
    pub name: String,
}

impl Label {
    /// Creates a label with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Accepts a missing, `null` or array `labels` field.
pub(crate) fn deserialize_labels<'de, D>(deserializer: D) -> Result<Vec<Label>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Label>>::deserialize(deserializer)?.unwrap_or_default())
}
