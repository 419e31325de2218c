//! Migration phases and the run state machine.

use serde::Serialize;
use std::fmt;

/// One of the three ordered migration stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Create missing milestones.
    Milestones,
    /// Create missing labels.
    Labels,
    /// Create or update open issues.
    Issues,
}

impl Phase {
    /// All phases in execution order. Issues reference milestones and labels,
    /// so they come last.
    pub const ALL: [Phase; 3] = [Phase::Milestones, Phase::Labels, Phase::Issues];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Milestones => write!(f, "milestones"),
            Self::Labels => write!(f, "labels"),
            Self::Issues => write!(f, "issues"),
        }
    }
}

/// Where a migration run currently is.
///
/// `Init → Milestones → Labels → Issues → Done`, with any phase able to move
/// to `Failed`. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Nothing has run yet.
    Init,
    /// Running a phase.
    Running(Phase),
    /// All phases completed.
    Done,
    /// A phase failed; the run was aborted.
    Failed(Phase),
}

impl RunState {
    /// Returns true for `Done` and `Failed`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_run_in_dependency_order() {
        assert_eq!(
            Phase::ALL.map(|p| p.to_string()),
            ["milestones", "labels", "issues"]
        );
    }

    #[test]
    fn only_done_and_failed_are_terminal() {
        assert!(!RunState::Init.is_terminal());
        assert!(!RunState::Running(Phase::Labels).is_terminal());
        assert!(RunState::Done.is_terminal());
        assert!(RunState::Failed(Phase::Issues).is_terminal());
    }
}
