//! Events emitted by the migration engine.

use crate::engine::Phase;
use crate::resolve::ResolutionWarning;
use serde::Serialize;

/// Something the engine did or decided.
///
/// In dry-run mode the same events are emitted for planned actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MigrationEvent {
    /// A phase began.
    PhaseStarted { phase: Phase },
    /// A phase finished without error.
    PhaseCompleted { phase: Phase },
    /// A milestone was created on the destination.
    MilestoneCreated { title: String },
    /// A milestone already existed on the destination.
    MilestoneSkipped { title: String },
    /// A label was created on the destination.
    LabelCreated { name: String, color: String },
    /// A label already existed on the destination.
    LabelSkipped { name: String },
    /// An issue was created on the destination.
    IssueCreated { title: String },
    /// An existing destination issue was overwritten.
    IssueUpdated { title: String, index: u64 },
    /// A milestone or label reference of an issue was dropped.
    UnresolvedReference {
        issue: String,
        warning: ResolutionWarning,
    },
    /// Replacing labels failed after the issue itself was edited.
    ///
    /// The destination issue now has the new body but stale labels.
    LabelReplaceFailed {
        title: String,
        index: u64,
        attempt: u32,
        error: String,
    },
}
