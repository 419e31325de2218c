//! Gitea REST v1 client, the migration destination.

mod wire;

pub use wire::{GiteaRepo, GiteaUser};

use crate::api::{ApiError, RestClient};
use crate::destination::{Destination, IssuePayload, NewLabel, NewMilestone};
use crate::model::{Issue, Label, Milestone};
use crate::pagination::PageRequest;
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use wire::{
    CreateIssueOption, CreateLabelOption, CreateMilestoneOption, EditIssueOption, GiteaIssue,
    GiteaLabel, GiteaMilestone, IssueLabelsOption,
};

/// Account-level Gitea client.
#[derive(Debug, Clone)]
pub struct GiteaClient {
    rest: RestClient,
}

impl GiteaClient {
    /// Creates a client for `server` authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `server` is not an http(s) URL.
    pub fn new(server: &str, token: &str) -> Result<Self, ApiError> {
        Ok(Self {
            rest: RestClient::new(server, "api/v1/", token)?,
        })
    }

    /// Fetches the authenticated user, verifying the token and connection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn current_user(&self) -> Result<GiteaUser, ApiError> {
        self.rest.get(self.rest.endpoint(["user"])).await
    }

    /// Looks up a repository by owner and name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no such repository is visible.
    pub async fn repository(&self, owner: &str, name: &str) -> Result<GiteaRepo, ApiError> {
        self.rest.get(self.rest.endpoint(["repos", owner, name])).await
    }

    /// Binds the client to a repository.
    #[must_use]
    pub fn into_destination(self, owner: &str, name: &str, repo_id: i64) -> GiteaDestination {
        GiteaDestination {
            client: self,
            owner: owner.to_string(),
            name: name.to_string(),
            repo_id,
        }
    }
}

/// A Gitea repository opened for migration.
#[derive(Debug, Clone)]
pub struct GiteaDestination {
    client: GiteaClient,
    owner: String,
    name: String,
    repo_id: i64,
}

impl GiteaDestination {
    /// Numeric ID of the bound repository.
    #[must_use]
    pub fn repo_id(&self) -> i64 {
        self.repo_id
    }

    fn repo_url(&self, tail: &[&str]) -> Url {
        let segments = ["repos", self.owner.as_str(), self.name.as_str()]
            .into_iter()
            .chain(tail.iter().copied());
        self.client.rest.endpoint(segments)
    }

    fn list_url(&self, resource: &str, extra: &[(&str, &str)], page: PageRequest) -> Url {
        let mut url = self.repo_url(&[resource]);
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in extra {
                query.append_pair(key, value);
            }
            query
                .append_pair("page", &page.page.to_string())
                .append_pair("limit", &page.per_page.to_string());
        }
        url
    }

    async fn list<W, T>(
        &self,
        resource: &str,
        extra: &[(&str, &str)],
        page: PageRequest,
    ) -> Result<Vec<T>, ApiError>
    where
        W: DeserializeOwned,
        T: From<W>,
    {
        debug!(resource, page = page.page, "Listing Gitea page");
        let items: Vec<W> = self
            .client
            .rest
            .get(self.list_url(resource, extra, page))
            .await?;
        Ok(items.into_iter().map(T::from).collect())
    }
}

#[async_trait]
impl Destination for GiteaDestination {
    async fn list_milestones(&self, page: PageRequest) -> Result<Vec<Milestone>, ApiError> {
        self.list::<GiteaMilestone, _>("milestones", &[("state", "all")], page)
            .await
    }

    async fn list_labels(&self, page: PageRequest) -> Result<Vec<Label>, ApiError> {
        self.list::<GiteaLabel, _>("labels", &[], page).await
    }

    async fn list_issues(&self, page: PageRequest) -> Result<Vec<Issue>, ApiError> {
        self.list::<GiteaIssue, _>("issues", &[("state", "all"), ("type", "issues")], page)
            .await
    }

    async fn create_milestone(&self, milestone: &NewMilestone) -> Result<Milestone, ApiError> {
        let created: GiteaMilestone = self
            .client
            .rest
            .send(
                Method::POST,
                self.repo_url(&["milestones"]),
                &CreateMilestoneOption::from(milestone),
            )
            .await?;
        Ok(created.into())
    }

    async fn create_label(&self, label: &NewLabel) -> Result<Label, ApiError> {
        let created: GiteaLabel = self
            .client
            .rest
            .send(
                Method::POST,
                self.repo_url(&["labels"]),
                &CreateLabelOption::from(label),
            )
            .await?;
        Ok(created.into())
    }

    async fn create_issue(&self, issue: &IssuePayload) -> Result<Issue, ApiError> {
        let created: GiteaIssue = self
            .client
            .rest
            .send(
                Method::POST,
                self.repo_url(&["issues"]),
                &CreateIssueOption::from(issue),
            )
            .await?;
        Ok(created.into())
    }

    async fn edit_issue(&self, index: u64, issue: &IssuePayload) -> Result<Issue, ApiError> {
        let index = index.to_string();
        let edited: GiteaIssue = self
            .client
            .rest
            .send(
                Method::PATCH,
                self.repo_url(&["issues", index.as_str()]),
                &EditIssueOption::from(issue),
            )
            .await?;
        Ok(edited.into())
    }

    async fn replace_issue_labels(
        &self,
        index: u64,
        label_ids: &[i64],
    ) -> Result<Vec<Label>, ApiError> {
        let index = index.to_string();
        let labels: Vec<GiteaLabel> = self
            .client
            .rest
            .send(
                Method::PUT,
                self.repo_url(&["issues", index.as_str(), "labels"]),
                &IssueLabelsOption { labels: label_ids },
            )
            .await?;
        Ok(labels.into_iter().map(Label::from).collect())
    }
}
