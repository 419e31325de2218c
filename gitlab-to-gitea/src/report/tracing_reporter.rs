//! Reporter backed by `tracing`.

use super::{MigrationEvent, Reporter};
use tracing::{debug, error, info, warn};

/// Writes events as structured `tracing` records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter {
    dry_run: bool,
}

impl TracingReporter {
    /// Creates a reporter; in dry-run mode actions are worded as plans.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    fn verb(&self, done: &'static str, planned: &'static str) -> &'static str {
        if self.dry_run {
            planned
        } else {
            done
        }
    }
}

impl Reporter for TracingReporter {
    fn report(&self, event: &MigrationEvent) {
        match event {
            MigrationEvent::PhaseStarted { phase } => info!(%phase, "Migrating {phase}"),
            MigrationEvent::PhaseCompleted { phase } => debug!(%phase, "Phase complete"),
            MigrationEvent::MilestoneCreated { title } => {
                info!(title = %title, "{} milestone", self.verb("Created", "Would create"));
            }
            MigrationEvent::MilestoneSkipped { title } => {
                debug!(title = %title, "Milestone exists, skipping");
            }
            MigrationEvent::LabelCreated { name, color } => {
                info!(name = %name, color = %color, "{} label", self.verb("Created", "Would create"));
            }
            MigrationEvent::LabelSkipped { name } => {
                debug!(name = %name, "Label exists, skipping");
            }
            MigrationEvent::IssueCreated { title } => {
                info!(title = %title, "{} issue", self.verb("Created", "Would create"));
            }
            MigrationEvent::IssueUpdated { title, index } => {
                info!(title = %title, index, "{} issue", self.verb("Updated", "Would update"));
            }
            MigrationEvent::UnresolvedReference { issue, warning } => {
                warn!(
                    issue = %issue,
                    kind = %warning.kind,
                    value = %warning.value,
                    "Unresolved reference, omitting it"
                );
            }
            MigrationEvent::LabelReplaceFailed {
                title,
                index,
                attempt,
                error,
            } => {
                error!(
                    title = %title,
                    index,
                    attempt,
                    error = %error,
                    "Issue edited but replacing its labels failed"
                );
            }
        }
    }
}
