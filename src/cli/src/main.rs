//! CLI for Issue to Content.
//!
//! Reads the issue from a GitHub webhook event and writes it as a static-site
//! content file with frontmatter.

use clap::Parser;
use issue_to_content::{
    error_command, set_output, PublishOutcome, Runner, RunnerConfig, RunnerError, PATH_OUTPUT,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue to Content - Publish closed issues as static-site content files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Folder content files are written under. Required when a closed issue is published.
    #[arg(long, env = "INPUT_CONTENTFOLDER")]
    content_folder: Option<PathBuf>,

    /// Path to the webhook event payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,

    /// File action outputs are appended to.
    #[arg(long, env = "GITHUB_OUTPUT")]
    github_output: Option<PathBuf>,

    /// Generate content without writing it.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    let github_output = args.github_output.clone();

    match run(args).await {
        Ok(outcome) => {
            print_summary(&outcome);

            let written_path = outcome.output_path().filter(|_| outcome.is_written());
            if let (Some(output_file), Some(path)) = (&github_output, written_path) {
                if let Err(e) =
                    set_output(output_file, PATH_OUTPUT, &path.display().to_string()).await
                {
                    return fail(&e.to_string());
                }
            }

            ExitCode::SUCCESS
        }
        Err(e) => fail(&e.to_string()),
    }
}

/// Initializes tracing with environment filter support.
///
/// Log lines end up in the workflow run's log, so they are kept to one line
/// per event with structured fields (`output_path`, `content`, `error`)
/// appended after the message.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        // Compact formatting without module target paths; the workflow log adds its own timestamps
        .with(fmt::layer().compact().with_target(false))
        // Runtime log filtering via RUST_LOG (e.g., RUST_LOG=debug shows payload loading)
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        // Register as the global default subscriber
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<PublishOutcome, RunnerError> {
    let mut config = RunnerConfig::new(args.event_path).with_dry_run(args.dry_run);
    // An unset action input arrives as an empty string.
    if let Some(content_folder) = args
        .content_folder
        .filter(|folder| !folder.as_os_str().is_empty())
    {
        config = config.with_content_folder(content_folder);
    }
    Runner::new(config).run().await
}

/// Reports a failure to the workflow and returns the failing exit code.
fn fail(message: &str) -> ExitCode {
    error!(error = %message, "Publishing failed");
    println!("{}", error_command(message));
    ExitCode::FAILURE
}

/// Prints the final outcome.
fn print_summary(outcome: &PublishOutcome) {
    match outcome {
        PublishOutcome::Written { location } => {
            info!(path = %location.output_path.display(), "Published issue");
        }
        PublishOutcome::DryRun { location, content } => {
            println!("\n[DRY RUN] Would write: {}", location.output_path.display());
            for line in content.lines() {
                println!("    {line}");
            }
        }
        PublishOutcome::Skipped { reason } => {
            info!(reason = %reason, "Nothing to publish");
        }
    }
}
