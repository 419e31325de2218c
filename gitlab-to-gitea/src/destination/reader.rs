//! Full-table snapshots of the destination repository.

use super::Destination;
use crate::api::ApiError;
use crate::lookup::LookupTable;
use crate::matching::MatchStrategy;
use crate::model::{Issue, Label, Milestone};
use crate::pagination::{Pager, DESTINATION_PAGE_SIZE};
use tracing::debug;

/// Drains destination listings into lookup tables.
#[derive(Debug)]
pub struct DestinationReader<'a, D: ?Sized> {
    destination: &'a D,
}

impl<'a, D: Destination + ?Sized> DestinationReader<'a, D> {
    /// Wraps a destination.
    pub fn new(destination: &'a D) -> Self {
        Self { destination }
    }

    /// Fetches every milestone, open or closed, keyed by title.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] hit while paging.
    pub async fn list_all_milestones(&self) -> Result<LookupTable<Milestone>, ApiError> {
        let destination = self.destination;
        let milestones = Pager::new(DESTINATION_PAGE_SIZE)
            .drain(move |page| destination.list_milestones(page))
            .await?;
        debug!(count = milestones.len(), "Fetched destination milestones");
        Ok(LookupTable::from_entries(milestones))
    }

    /// Fetches every label, keyed by name.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] hit while paging.
    pub async fn list_all_labels(&self) -> Result<LookupTable<Label>, ApiError> {
        let destination = self.destination;
        let labels = Pager::new(DESTINATION_PAGE_SIZE)
            .drain(move |page| destination.list_labels(page))
            .await?;
        debug!(count = labels.len(), "Fetched destination labels");
        Ok(LookupTable::from_entries(labels))
    }

    /// Fetches every issue, open or closed, keyed per `strategy`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] hit while paging.
    pub async fn list_all_issues(
        &self,
        strategy: MatchStrategy,
    ) -> Result<LookupTable<Issue>, ApiError> {
        let destination = self.destination;
        let issues = Pager::new(DESTINATION_PAGE_SIZE)
            .drain(move |page| destination.list_issues(page))
            .await?;
        debug!(count = issues.len(), %strategy, "Fetched destination issues");
        Ok(LookupTable::from_entries_by(issues, |issue| {
            strategy.destination_key(issue)
        }))
    }
}
