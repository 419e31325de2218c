//! Read-write access to the repository being migrated into.

mod payload;
mod reader;

pub use payload::{IssuePayload, NewLabel, NewMilestone};
pub use reader::DestinationReader;

use crate::api::ApiError;
use crate::model::{Issue, Label, Milestone};
use crate::pagination::PageRequest;
use async_trait::async_trait;

/// Paged reads and individual mutations against the destination repository.
///
/// Listings cover every state (open and closed); the issue listing excludes
/// pull requests. No call is retried by the implementation.
#[async_trait]
pub trait Destination: Send + Sync {
    /// Lists one page of milestones in any state.
    async fn list_milestones(&self, page: PageRequest) -> Result<Vec<Milestone>, ApiError>;

    /// Lists one page of labels.
    async fn list_labels(&self, page: PageRequest) -> Result<Vec<Label>, ApiError>;

    /// Lists one page of issues in any state.
    async fn list_issues(&self, page: PageRequest) -> Result<Vec<Issue>, ApiError>;

    /// Creates a milestone.
    async fn create_milestone(&self, milestone: &NewMilestone) -> Result<Milestone, ApiError>;

    /// Creates a label.
    async fn create_label(&self, label: &NewLabel) -> Result<Label, ApiError>;

    /// Creates an issue with the payload's labels attached.
    async fn create_issue(&self, issue: &IssuePayload) -> Result<Issue, ApiError>;

    /// Overwrites title, body, milestone and deadline of the issue at `index`.
    ///
    /// Labels are left untouched; see [`Destination::replace_issue_labels`].
    async fn edit_issue(&self, index: u64, issue: &IssuePayload) -> Result<Issue, ApiError>;

    /// Replaces the full label set of the issue at `index`.
    async fn replace_issue_labels(
        &self,
        index: u64,
        label_ids: &[i64],
    ) -> Result<Vec<Label>, ApiError>;
}
