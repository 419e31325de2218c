//! GitLab REST v4 response shapes.

use crate::model::{Label, Milestone, MilestoneState, SourceIssue};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// The authenticated GitLab user.
#[derive(Debug, Clone, Deserialize)]
pub struct GitLabUser {
    /// Numeric user ID.
    pub id: u64,
    /// Login name.
    pub username: String,
}

/// A GitLab project, as far as the migration cares.
#[derive(Debug, Clone, Deserialize)]
pub struct GitLabProject {
    /// Numeric project ID used by every project-scoped endpoint.
    pub id: u64,
    /// Full `namespace/name` path.
    pub path_with_namespace: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct GitLabMilestone {
    id: i64,
    title: String,
    #[serde(default)]
    description: Option<String>,
    state: String,
    #[serde(default)]
    due_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GitLabLabel {
    id: i64,
    name: String,
    color: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GitLabMilestoneRef {
    title: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct GitLabIssue {
    iid: u64,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    milestone: Option<GitLabMilestoneRef>,
    #[serde(default)]
    labels: Vec<String>,
}

/// GitLab due dates are calendar days; they are pinned to midnight UTC.
fn start_of_day(date: Option<NaiveDate>) -> Option<DateTime<Utc>> {
    date.and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

impl From<GitLabMilestone> for Milestone {
    fn from(m: GitLabMilestone) -> Self {
        let state = if m.state == "closed" {
            MilestoneState::Closed
        } else {
            MilestoneState::Active
        };
        Self {
            id: m.id,
            title: m.title,
            description: m.description.unwrap_or_default(),
            due_date: start_of_day(m.due_date),
            state,
        }
    }
}

impl From<GitLabLabel> for Label {
    fn from(l: GitLabLabel) -> Self {
        Self {
            id: l.id,
            name: l.name,
            description: l.description.unwrap_or_default(),
            color: l.color,
        }
    }
}

impl From<GitLabIssue> for SourceIssue {
    fn from(i: GitLabIssue) -> Self {
        Self {
            iid: i.iid,
            title: i.title,
            body: i.description.unwrap_or_default(),
            due_date: start_of_day(i.due_date),
            milestone: i.milestone.map(|m| m.title),
            labels: i.labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_issue_with_nulls() {
        let raw: GitLabIssue = serde_json::from_value(json!({
            "iid": 7,
            "title": "Crash on start",
            "description": null,
            "due_date": null,
            "milestone": null,
            "labels": ["bug"]
        }))
        .unwrap();

        let issue = SourceIssue::from(raw);
        assert_eq!(issue.iid, 7);
        assert_eq!(issue.body, "");
        assert_eq!(issue.due_date, None);
        assert_eq!(issue.milestone, None);
        assert_eq!(issue.labels, vec!["bug".to_string()]);
    }

    #[test]
    fn milestone_due_date_is_midnight_utc() {
        let raw: GitLabMilestone = serde_json::from_value(json!({
            "id": 3,
            "iid": 1,
            "title": "v1",
            "description": "first",
            "state": "active",
            "due_date": "2024-03-15"
        }))
        .unwrap();

        let milestone = Milestone::from(raw);
        assert_eq!(milestone.state, MilestoneState::Active);
        assert_eq!(
            milestone.due_date.map(|d| d.to_rfc3339()),
            Some("2024-03-15T00:00:00+00:00".to_string())
        );
    }
}
