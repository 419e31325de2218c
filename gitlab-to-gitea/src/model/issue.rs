//! Issue projections.
//!
//! Source and destination issues carry different references: a source issue
//! names its milestone and labels, a destination issue is addressed by its
//! per-repository index.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifecycle state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    /// Issue is open.
    Open,
    /// Issue is closed.
    Closed,
}

/// An open issue as read from the source project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceIssue {
    /// Source-assigned per-project number.
    pub iid: u64,
    /// Title, the identity key.
    pub title: String,
    /// Markdown body.
    pub body: String,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Title of the referenced milestone, if any.
    pub milestone: Option<String>,
    /// Names of the attached labels, in source order.
    pub labels: Vec<String>,
}

/// An issue as it exists on the destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Destination-assigned sequential number, stable per repository.
    pub index: u64,
    /// Title, the identity key.
    pub title: String,
    /// Markdown body.
    pub body: String,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
    /// Title of the linked milestone, if any.
    pub milestone: Option<String>,
    /// Names of the attached labels.
    pub labels: Vec<String>,
    /// Open or closed.
    pub state: IssueState,
}
