#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod actions;
pub mod content;
pub mod event;
pub mod issue;
pub mod outcome;
pub mod paths;
pub mod runner;

pub use actions::{error_command, set_output, OutputError, PATH_OUTPUT};
pub use content::{build_frontmatter, generate, Frontmatter, LeadingImage};
pub use event::{load_event, EventError, EventPayload};
pub use issue::{Issue, IssuePayload, Label};
pub use outcome::PublishOutcome;
pub use paths::{resolve, OutputLocation, PathError, FALLBACK_TIME_ZONE};
pub use runner::{Runner, RunnerConfig, RunnerError};
