//! Output location resolution.
//!
//! Content files are bucketed by the calendar date an issue was closed on,
//! as observed in a single fixed time zone:
//!
//! ```text
//! <content-folder>/<year>/<month>/<day>/<number>.md
//! ```
//!
//! Month and day carry no leading zero.

mod error;

pub use error::PathError;

use chrono::{DateTime, Datelike, NaiveDate};
use chrono_tz::Tz;
use std::path::{Path, PathBuf};

/// Time zone used to decide which day an issue was closed on.
pub const FALLBACK_TIME_ZONE: Tz = chrono_tz::America::Los_Angeles;

/// Where a content file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    /// Date-bucketed folder containing the file.
    pub output_folder: PathBuf,

    /// Full path of the file, directly inside [`Self::output_folder`].
    pub output_path: PathBuf,
}

/// Resolves the output folder and file path for an issue.
///
/// # Arguments
///
/// * `content_folder` - Root folder of the site's content
/// * `closed_at` - Close timestamp of the issue (RFC 3339)
/// * `number` - Issue number
///
/// # Errors
///
/// Returns [`PathError::InvalidTimestamp`] if `closed_at` cannot be parsed.
pub fn resolve(
    content_folder: &Path,
    closed_at: &str,
    number: u64,
) -> Result<OutputLocation, PathError> {
    let date = closed_date(closed_at)?;
    let output_folder = content_folder
        .join(date.year().to_string())
        .join(date.month().to_string())
        .join(date.day().to_string());
    let output_path = output_folder.join(format!("{number}.md"));

    Ok(OutputLocation {
        output_folder,
        output_path,
    })
}

/// Returns the calendar date of `closed_at` in [`FALLBACK_TIME_ZONE`].
fn closed_date(closed_at: &str) -> Result<NaiveDate, PathError> {
    let instant =
        DateTime::parse_from_rfc3339(closed_at).map_err(|e| PathError::InvalidTimestamp {
            value: closed_at.to_string(),
            source: e,
        })?;

    Ok(instant.with_timezone(&FALLBACK_TIME_ZONE).date_naive())
}
