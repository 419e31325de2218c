//! Layered settings: file, then environment, then command line.

use crate::config::ConfigError;
use crate::matching::MatchStrategy;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Environment variable holding the GitLab token.
pub const GITLAB_TOKEN_ENV: &str = "GITLAB_TOKEN";

/// Environment variable holding the Gitea token.
pub const GITEA_TOKEN_ENV: &str = "GITEA_TOKEN";

/// Connection settings for one side of the migration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct EndpointSettings {
    /// Base URL of the server.
    pub server: Option<String>,
    /// API token.
    pub token: Option<String>,
    /// Project path, `namespace/name`.
    pub project: Option<String>,
}

impl EndpointSettings {
    fn merge(self, overrides: Self) -> Self {
        Self {
            server: overrides.server.or(self.server),
            token: overrides.token.or(self.token),
            project: overrides.project.or(self.project),
        }
    }
}

/// Engine switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct OptionSettings {
    /// Skip every mutating call.
    pub dry_run: Option<bool>,
    /// Issue matching strategy.
    pub match_by: Option<MatchStrategy>,
    /// Retries for the label step of an issue update.
    pub label_retries: Option<u32>,
}

impl OptionSettings {
    fn merge(self, overrides: Self) -> Self {
        Self {
            dry_run: overrides.dry_run.or(self.dry_run),
            match_by: overrides.match_by.or(self.match_by),
            label_retries: overrides.label_retries.or(self.label_retries),
        }
    }
}

/// Unvalidated settings from one layer.
///
/// Layers are combined with [`Settings::merge`]; values present in the
/// overriding layer win.
///
/// ```toml
/// [gitlab]
/// server = "https://gitlab.example.com/"
/// project = "group/project"
///
/// [gitea]
/// server = "https://gitea.example.com/"
/// project = "owner/project"
///
/// [options]
/// dry-run = true
/// match-by = "source-tag"
/// label-retries = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Source side.
    #[serde(default)]
    pub gitlab: EndpointSettings,
    /// Destination side.
    #[serde(default)]
    pub gitea: EndpointSettings,
    /// Engine switches.
    #[serde(default)]
    pub options: OptionSettings,
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading settings");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, &path.display().to_string())
    }

    /// Parses settings from TOML text. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TomlError`] on malformed input or unknown keys.
    pub fn parse(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: origin.to_string(),
            source: e,
        })
    }

    /// Reads the token environment variables. Unset or empty variables are
    /// left as `None`.
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            gitlab: EndpointSettings {
                token: var(GITLAB_TOKEN_ENV),
                ..Default::default()
            },
            gitea: EndpointSettings {
                token: var(GITEA_TOKEN_ENV),
                ..Default::default()
            },
            options: OptionSettings::default(),
        }
    }

    /// Combines two layers. Values set in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            gitlab: self.gitlab.merge(overrides.gitlab),
            gitea: self.gitea.merge(overrides.gitea),
            options: self.options.merge(overrides.options),
        }
    }
}
