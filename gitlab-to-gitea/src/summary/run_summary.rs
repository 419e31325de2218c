//! Run summary types.

use crate::report::MigrationEvent;
use serde::Serialize;

/// Counts of what a migration run did (or, in dry-run mode, would do).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Milestones created on the destination.
    pub milestones_created: usize,

    /// Milestones that already existed.
    pub milestones_skipped: usize,

    /// Labels created on the destination.
    pub labels_created: usize,

    /// Labels that already existed.
    pub labels_skipped: usize,

    /// Issues created on the destination.
    pub issues_created: usize,

    /// Existing destination issues overwritten.
    pub issues_updated: usize,

    /// Milestone or label references that could not be resolved.
    pub unresolved_references: usize,

    /// Failed attempts to replace an edited issue's labels.
    pub label_replace_failures: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with an engine event.
    pub fn record(&mut self, event: &MigrationEvent) {
        match event {
            MigrationEvent::MilestoneCreated { .. } => self.milestones_created += 1,
            MigrationEvent::MilestoneSkipped { .. } => self.milestones_skipped += 1,
            MigrationEvent::LabelCreated { .. } => self.labels_created += 1,
            MigrationEvent::LabelSkipped { .. } => self.labels_skipped += 1,
            MigrationEvent::IssueCreated { .. } => self.issues_created += 1,
            MigrationEvent::IssueUpdated { .. } => self.issues_updated += 1,
            MigrationEvent::UnresolvedReference { .. } => self.unresolved_references += 1,
            MigrationEvent::LabelReplaceFailed { .. } => self.label_replace_failures += 1,
            MigrationEvent::PhaseStarted { .. } | MigrationEvent::PhaseCompleted { .. } => {}
        }
    }

    /// Total number of create and update calls made (or planned).
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.milestones_created + self.labels_created + self.issues_created + self.issues_updated
    }

    /// Returns true if the run changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.total_changes() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{ResolutionWarning, WarningKind};

    #[test]
    fn can_record_events() {
        let mut summary = RunSummary::new(false);

        summary.record(&MigrationEvent::MilestoneCreated {
            title: "v2".to_string(),
        });
        summary.record(&MigrationEvent::IssueUpdated {
            title: "Bug A".to_string(),
            index: 42,
        });
        summary.record(&MigrationEvent::UnresolvedReference {
            issue: "Bug A".to_string(),
            warning: ResolutionWarning {
                kind: WarningKind::UnknownLabel,
                value: "wontfix".to_string(),
            },
        });

        assert_eq!(summary.milestones_created, 1);
        assert_eq!(summary.issues_updated, 1);
        assert_eq!(summary.unresolved_references, 1);
        assert_eq!(summary.total_changes(), 2);
        assert!(!summary.is_noop());
    }

    #[test]
    fn skips_are_not_changes() {
        let mut summary = RunSummary::new(true);
        summary.record(&MigrationEvent::LabelSkipped {
            name: "bug".to_string(),
        });

        assert!(summary.dry_run);
        assert_eq!(summary.labels_skipped, 1);
        assert!(summary.is_noop());
    }
}
