//! CLI for the GitLab to Gitea migrator.
//!
//! Copies milestones, labels and open issues from a GitLab project into a
//! Gitea repository. Safe to re-run: existing milestones and labels are left
//! alone and existing issues are updated in place.

use clap::Parser;
use gitlab_to_gitea::config::{EndpointSettings, OptionSettings};
use gitlab_to_gitea::{MatchStrategy, RunSummary, Runner, RunnerConfig, RunnerError, Settings};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// GitLab to Gitea - Migrate milestones, labels and open issues.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitLab API token. Falls back to the GITLAB_TOKEN environment variable.
    #[arg(long)]
    gitlab_token: Option<String>,

    /// GitLab base URL [default: https://gitlab.com/].
    #[arg(long)]
    gitlab_server: Option<String>,

    /// GitLab project path, e.g. `group/project`.
    #[arg(long)]
    gitlab_project: Option<String>,

    /// Gitea API token. Falls back to the GITEA_TOKEN environment variable.
    #[arg(long)]
    gitea_token: Option<String>,

    /// Gitea base URL.
    #[arg(long)]
    gitea_server: Option<String>,

    /// Gitea repository, `owner/name`. Defaults to the GitLab project path.
    #[arg(long)]
    gitea_project: Option<String>,

    /// TOML settings file. Flags override values from the file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preview changes without writing to Gitea.
    #[arg(long)]
    dry_run: bool,

    /// How existing Gitea issues are matched: `title` or `source-tag`.
    #[arg(long)]
    match_by: Option<MatchStrategy>,

    /// Retries for replacing an updated issue's labels.
    #[arg(long)]
    label_retries: Option<u32>,
}

impl Args {
    /// Flag layer; only values given on the command line are set.
    fn to_settings(&self) -> Settings {
        Settings {
            gitlab: EndpointSettings {
                server: self.gitlab_server.clone(),
                token: self.gitlab_token.clone(),
                project: self.gitlab_project.clone(),
            },
            gitea: EndpointSettings {
                server: self.gitea_server.clone(),
                token: self.gitea_token.clone(),
                project: self.gitea_project.clone(),
            },
            options: OptionSettings {
                dry_run: self.dry_run.then_some(true),
                match_by: self.match_by,
                label_retries: self.label_retries,
            },
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(RunnerError::Migration(e)) => {
            error!(error = %e, "Migration failed");
            ExitCode::from(1)
        }
        Err(e) => {
            error!(error = %e, "Setup failed");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Merges file, environment and flags, then runs the migration.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let file = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let settings = file.merge(Settings::from_env()).merge(args.to_settings());

    let config = RunnerConfig::from_settings(settings)?;
    Runner::new(config).run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!(
        "  Milestones: {} created, {} already present",
        summary.milestones_created, summary.milestones_skipped
    );
    println!(
        "  Labels: {} created, {} already present",
        summary.labels_created, summary.labels_skipped
    );
    println!(
        "  Issues: {} created, {} updated",
        summary.issues_created, summary.issues_updated
    );

    if summary.unresolved_references > 0 {
        println!("  Unresolved references: {}", summary.unresolved_references);
    }
    if summary.label_replace_failures > 0 {
        println!("  Label replace failures: {}", summary.label_replace_failures);
    }
}
