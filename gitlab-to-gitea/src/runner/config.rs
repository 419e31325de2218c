//! Runner configuration.

use crate::config::{parse_server, require, ConfigError, ProjectPath, Settings};
use crate::engine::MigrationOptions;
use crate::gitlab::DEFAULT_SERVER;
use url::Url;

/// Validated configuration for a migration run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitLab base URL.
    gitlab_server: Url,
    /// GitLab API token.
    gitlab_token: String,
    /// GitLab project to read from.
    gitlab_project: ProjectPath,
    /// Gitea base URL.
    gitea_server: Url,
    /// Gitea API token.
    gitea_token: String,
    /// Gitea repository to write to, always `owner/name`.
    gitea_project: ProjectPath,
    /// Owner half of `gitea_project`.
    gitea_owner: String,
    /// Name half of `gitea_project`.
    gitea_name: String,
    /// Engine switches.
    options: MigrationOptions,
}

impl RunnerConfig {
    /// Validates merged settings.
    ///
    /// The GitLab server defaults to gitlab.com and the Gitea project defaults
    /// to the GitLab project path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required value is missing, a server is
    /// not an http(s) URL, or a project path is malformed.
    pub fn from_settings(settings: Settings) -> Result<Self, ConfigError> {
        let Settings {
            gitlab,
            gitea,
            options,
        } = settings;

        let gitlab_server = parse_server(
            "gitlab.server",
            gitlab.server.as_deref().unwrap_or(DEFAULT_SERVER),
        )?;
        let gitlab_token = require("gitlab.token", gitlab.token)?;
        let gitlab_project: ProjectPath = require("gitlab.project", gitlab.project)?.parse()?;

        let gitea_server = parse_server("gitea.server", &require("gitea.server", gitea.server)?)?;
        let gitea_token = require("gitea.token", gitea.token)?;
        let gitea_project: ProjectPath = match gitea.project {
            Some(project) => project.parse()?,
            None => gitlab_project.clone(),
        };
        let Some((gitea_owner, gitea_name)) = gitea_project
            .owner_and_name()
            .map(|(owner, name)| (owner.to_string(), name.to_string()))
        else {
            return Err(ConfigError::invalid(
                "gitea.project",
                format!("'{gitea_project}' must be exactly owner/name"),
            ));
        };

        Ok(Self {
            gitlab_server,
            gitlab_token,
            gitlab_project,
            gitea_server,
            gitea_token,
            gitea_project,
            gitea_owner,
            gitea_name,
            options: MigrationOptions {
                dry_run: options.dry_run.unwrap_or(false),
                match_strategy: options.match_by.unwrap_or_default(),
                label_retries: options.label_retries.unwrap_or(0),
            },
        })
    }

    /// Returns the GitLab base URL.
    pub fn gitlab_server(&self) -> &Url {
        &self.gitlab_server
    }

    /// Returns the GitLab token.
    pub fn gitlab_token(&self) -> &str {
        &self.gitlab_token
    }

    /// Returns the GitLab project path.
    pub fn gitlab_project(&self) -> &ProjectPath {
        &self.gitlab_project
    }

    /// Returns the Gitea base URL.
    pub fn gitea_server(&self) -> &Url {
        &self.gitea_server
    }

    /// Returns the Gitea token.
    pub fn gitea_token(&self) -> &str {
        &self.gitea_token
    }

    /// Returns the Gitea repository path.
    pub fn gitea_project(&self) -> &ProjectPath {
        &self.gitea_project
    }

    /// Returns the owner of the Gitea repository.
    pub fn gitea_owner(&self) -> &str {
        &self.gitea_owner
    }

    /// Returns the name of the Gitea repository.
    pub fn gitea_name(&self) -> &str {
        &self.gitea_name
    }

    /// Returns the engine options.
    pub fn options(&self) -> MigrationOptions {
        self.options
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.options.dry_run
    }
}
