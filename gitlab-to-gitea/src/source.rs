//! Read access to the project being migrated from.

use crate::api::ApiError;
use crate::model::{Label, Milestone, SourceIssue};
use crate::pagination::PageRequest;
use async_trait::async_trait;

/// Paged, read-only view of a source project.
///
/// Every listing is consumed page by page by the caller; an empty page ends
/// the listing. Implementations apply their own state filters.
#[async_trait]
pub trait SourceReader: Send + Sync {
    /// Lists one page of open (active) milestones.
    async fn list_open_milestones(&self, page: PageRequest) -> Result<Vec<Milestone>, ApiError>;

    /// Lists one page of labels.
    async fn list_labels(&self, page: PageRequest) -> Result<Vec<Label>, ApiError>;

    /// Lists one page of open issues.
    async fn list_open_issues(&self, page: PageRequest) -> Result<Vec<SourceIssue>, ApiError>;
}
