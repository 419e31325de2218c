//! Engine error types.

use super::Phase;
use crate::api::ApiError;
use thiserror::Error;

/// A migration run aborted in one of its phases.
#[derive(Debug, Error)]
pub enum MigrationError {
    /// A remote call failed; the phase and the failing operation are named.
    #[error("migrating {phase}: {operation}: {source}")]
    Phase {
        /// Phase the run was in.
        phase: Phase,
        /// Remote operation that failed, e.g. `creating milestone`.
        operation: &'static str,
        /// Underlying API error.
        #[source]
        source: ApiError,
    },
}

impl MigrationError {
    pub(crate) fn phase(phase: Phase, operation: &'static str, source: ApiError) -> Self {
        Self::Phase {
            phase,
            operation,
            source,
        }
    }

    /// Phase the run failed in.
    #[must_use]
    pub fn failed_phase(&self) -> Phase {
        match self {
            Self::Phase { phase, .. } => *phase,
        }
    }
}
