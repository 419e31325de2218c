//! GitLab REST v4 client, the migration source.

mod wire;

pub use wire::{GitLabProject, GitLabUser};

use crate::api::{ApiError, RestClient};
use crate::model::{Label, Milestone, SourceIssue};
use crate::pagination::PageRequest;
use crate::source::SourceReader;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use wire::{GitLabIssue, GitLabLabel, GitLabMilestone};

/// Public GitLab instance used when no server is configured.
pub const DEFAULT_SERVER: &str = "https://gitlab.com/";

/// Account-level GitLab client.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    rest: RestClient,
}

impl GitLabClient {
    /// Creates a client for `server` authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `server` is not an http(s) URL.
    pub fn new(server: &str, token: &str) -> Result<Self, ApiError> {
        Ok(Self {
            rest: RestClient::new(server, "api/v4/", token)?,
        })
    }

    /// Fetches the authenticated user, verifying the token and connection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn current_user(&self) -> Result<GitLabUser, ApiError> {
        self.rest.get(self.rest.endpoint(["user"])).await
    }

    /// Looks up a project by its `namespace/name` path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no such project is visible.
    pub async fn project(&self, path: &str) -> Result<GitLabProject, ApiError> {
        self.rest.get(self.rest.endpoint(["projects", path])).await
    }

    /// Binds the client to a project.
    #[must_use]
    pub fn into_source(self, project_id: u64) -> GitLabSource {
        GitLabSource {
            client: self,
            project_id,
        }
    }
}

/// A GitLab project opened for reading.
#[derive(Debug, Clone)]
pub struct GitLabSource {
    client: GitLabClient,
    project_id: u64,
}

impl GitLabSource {
    /// Numeric ID of the bound project.
    #[must_use]
    pub fn project_id(&self) -> u64 {
        self.project_id
    }

    fn list_url(&self, resource: &str, state: Option<&str>, page: PageRequest) -> Url {
        let mut url = self
            .client
            .rest
            .endpoint(["projects", &self.project_id.to_string(), resource]);
        {
            let mut query = url.query_pairs_mut();
            if let Some(state) = state {
                query.append_pair("state", state);
            }
            query
                .append_pair("page", &page.page.to_string())
                .append_pair("per_page", &page.per_page.to_string());
        }
        url
    }

    async fn list<W, T>(
        &self,
        resource: &str,
        state: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<T>, ApiError>
    where
        W: DeserializeOwned,
        T: From<W>,
    {
        debug!(resource, page = page.page, "Listing GitLab page");
        let items: Vec<W> = self
            .client
            .rest
            .get(self.list_url(resource, state, page))
            .await?;
        Ok(items.into_iter().map(T::from).collect())
    }
}

#[async_trait]
impl SourceReader for GitLabSource {
    async fn list_open_milestones(&self, page: PageRequest) -> Result<Vec<Milestone>, ApiError> {
        self.list::<GitLabMilestone, _>("milestones", Some("active"), page)
            .await
    }

    async fn list_labels(&self, page: PageRequest) -> Result<Vec<Label>, ApiError> {
        self.list::<GitLabLabel, _>("labels", None, page).await
    }

    async fn list_open_issues(&self, page: PageRequest) -> Result<Vec<SourceIssue>, ApiError> {
        self.list::<GitLabIssue, _>("issues", Some("opened"), page)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_carries_state_and_paging() {
        let source = GitLabClient::new("https://gitlab.example.com", "t")
            .unwrap()
            .into_source(42);
        let url = source.list_url(
            "issues",
            Some("opened"),
            PageRequest {
                page: 2,
                per_page: 100,
            },
        );

        assert_eq!(
            url.as_str(),
            "https://gitlab.example.com/api/v4/projects/42/issues?state=opened&page=2&per_page=100"
        );
    }
}
