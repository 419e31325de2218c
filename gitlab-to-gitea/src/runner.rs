//! Connects both servers and drives a migration run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::{RunnerError, SetupError};

use crate::engine::Migrator;
use crate::gitea::{GiteaClient, GiteaDestination};
use crate::gitlab::{GitLabClient, GitLabSource};
use crate::report::TracingReporter;
use crate::summary::RunSummary;
use tracing::info;

/// Runs a migration described by a [`RunnerConfig`].
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Verifies both tokens and resolves the project and repository.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Step`] naming the first check that failed.
    pub async fn connect(&self) -> Result<(GitLabSource, GiteaDestination), SetupError> {
        let config = &self.config;

        let gitlab = GitLabClient::new(config.gitlab_server().as_str(), config.gitlab_token())
            .map_err(SetupError::step("creating GitLab client"))?;
        let user = gitlab
            .current_user()
            .await
            .map_err(SetupError::step("getting GitLab user"))?;
        info!(user = %user.username, server = %config.gitlab_server(), "Connected to GitLab");

        let project = gitlab
            .project(config.gitlab_project().as_str())
            .await
            .map_err(SetupError::step("getting GitLab project"))?;
        info!(project = %project.path_with_namespace, id = project.id, "Found GitLab project");

        let gitea = GiteaClient::new(config.gitea_server().as_str(), config.gitea_token())
            .map_err(SetupError::step("creating Gitea client"))?;
        let user = gitea
            .current_user()
            .await
            .map_err(SetupError::step("getting Gitea user"))?;
        info!(user = %user.login, server = %config.gitea_server(), "Connected to Gitea");

        let (owner, name) = (config.gitea_owner(), config.gitea_name());
        let repo = gitea
            .repository(owner, name)
            .await
            .map_err(SetupError::step("getting Gitea repository"))?;
        info!(repo = %repo.full_name, id = repo.id, "Found Gitea repository");

        Ok((
            gitlab.into_source(project.id),
            gitea.into_destination(owner, name, repo.id),
        ))
    }

    /// Connects, then runs all phases, logging progress through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Setup`] if connecting fails and
    /// [`RunnerError::Migration`] if a phase fails.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let (source, destination) = self.connect().await?;

        let options = self.config.options();
        info!(
            dry_run = options.dry_run,
            match_by = %options.match_strategy,
            "Starting migration"
        );

        let mut migrator = Migrator::new(
            source,
            destination,
            TracingReporter::new(options.dry_run),
            options,
        );
        Ok(migrator.run().await?)
    }
}
