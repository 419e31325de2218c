//! Runner error types.

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::engine::MigrationError;

/// Failures before the first phase starts.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// Invalid or incomplete configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A connectivity check failed.
    #[error("{step}: {source}")]
    Step {
        /// What was being done, e.g. `getting Gitea repository`.
        step: &'static str,
        #[source]
        source: ApiError,
    },
}

impl SetupError {
    pub(crate) fn step(step: &'static str) -> impl FnOnce(ApiError) -> Self {
        move |source| Self::Step { step, source }
    }
}

/// Errors that can occur during a full run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The run never started.
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// A phase failed.
    #[error(transparent)]
    Migration(#[from] MigrationError),
}

impl From<ConfigError> for RunnerError {
    fn from(e: ConfigError) -> Self {
        Self::Setup(e.into())
    }
}
