//! GitHub Actions result reporting.
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT`; failures are
//! reported with an `::error::` workflow command on stdout.

mod error;

pub use error::OutputError;

use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Name of the output carrying the written file's path.
pub const PATH_OUTPUT: &str = "path";

const DELIMITER: &str = "ISSUE_TO_CONTENT_EOF";

/// Appends an output `name` with `value` to the action output file.
///
/// Multi-line values use the heredoc form.
///
/// # Errors
///
/// Returns [`OutputError`] if the file cannot be written or the value collides
/// with the heredoc delimiter.
pub async fn set_output(output_file: &Path, name: &str, value: &str) -> Result<(), OutputError> {
    debug!(file = %output_file.display(), name, "Setting action output");

    let entry = format_output(name, value)?;
    let io_error = |e| OutputError::IoError {
        path: output_file.display().to_string(),
        source: e,
    };

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_file)
        .await
        .map_err(io_error)?;
    file.write_all(entry.as_bytes()).await.map_err(io_error)?;
    file.flush().await.map_err(io_error)
}

/// Formats a single output entry.
fn format_output(name: &str, value: &str) -> Result<String, OutputError> {
    if !value.contains('\n') && !value.contains('\r') {
        return Ok(format!("{name}={value}\n"));
    }

    if value.lines().any(|line| line == DELIMITER) {
        return Err(OutputError::DelimiterCollision {
            name: name.to_string(),
        });
    }

    Ok(format!("{name}<<{DELIMITER}\n{value}\n{DELIMITER}\n"))
}

/// Formats an `::error::` workflow command for `message`.
#[must_use]
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Escapes workflow command data.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn single_line_output() {
        assert_eq!(
            format_output("path", "blog/2023/12/1/123.md").unwrap(),
            "path=blog/2023/12/1/123.md\n"
        );
    }

    #[test]
    fn multi_line_output_uses_heredoc() {
        assert_eq!(
            format_output("content", "a\nb").unwrap(),
            format!("content<<{DELIMITER}\na\nb\n{DELIMITER}\n")
        );
    }

    #[test]
    fn delimiter_collision_is_rejected() {
        let value = format!("a\n{DELIMITER}\nb");

        assert!(matches!(
            format_output("content", &value),
            Err(OutputError::DelimiterCollision { .. })
        ));
    }

    #[test]
    fn error_command_escapes_message() {
        assert_eq!(
            error_command("100% failed\r\nretry"),
            "::error::100%25 failed%0D%0Aretry"
        );
    }

    #[tokio::test]
    async fn set_output_appends() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("output");
        std::fs::write(&file, "existing=1\n").unwrap();

        set_output(&file, PATH_OUTPUT, "blog/1.md").await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "existing=1\npath=blog/1.md\n"
        );
    }

    #[tokio::test]
    async fn set_output_creates_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("output");

        set_output(&file, PATH_OUTPUT, "blog/1.md").await.unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "path=blog/1.md\n");
    }

    #[tokio::test]
    async fn set_output_missing_folder() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("missing/output");

        let result = set_output(&file, PATH_OUTPUT, "x").await;
        assert!(matches!(result, Err(OutputError::IoError { .. })));
    }
}
