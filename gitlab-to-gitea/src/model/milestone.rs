//! Milestone projection.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifecycle state of a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneState {
    /// Milestone is open (GitLab `active`, Gitea `open`).
    Active,
    /// Milestone is closed.
    Closed,
}

/// A named, optionally time-boxed grouping of issues.
///
/// Identity is the exact, case-sensitive `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Service-assigned identifier. Only meaningful for destination milestones.
    pub id: i64,
    /// Title, unique within a project.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Open or closed.
    pub state: MilestoneState,
}
