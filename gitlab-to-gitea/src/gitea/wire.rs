//! Gitea REST v1 request and response shapes.

use crate::destination::{IssuePayload, NewLabel, NewMilestone};
use crate::model::{Issue, IssueState, Label, Milestone, MilestoneState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated Gitea user.
#[derive(Debug, Clone, Deserialize)]
pub struct GiteaUser {
    /// Numeric user ID.
    pub id: i64,
    /// Login name.
    pub login: String,
}

/// A Gitea repository, as far as the migration cares.
#[derive(Debug, Clone, Deserialize)]
pub struct GiteaRepo {
    /// Numeric repository ID.
    pub id: i64,
    /// Full `owner/name`.
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct GiteaMilestone {
    id: i64,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    due_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GiteaLabel {
    id: i64,
    name: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GiteaMilestoneRef {
    title: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct GiteaIssue {
    number: u64,
    title: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    milestone: Option<GiteaMilestoneRef>,
    #[serde(default)]
    labels: Option<Vec<GiteaLabel>>,
}

impl From<GiteaMilestone> for Milestone {
    fn from(m: GiteaMilestone) -> Self {
        let state = match m.state.as_deref() {
            Some("closed") => MilestoneState::Closed,
            _ => MilestoneState::Active,
        };
        Self {
            id: m.id,
            title: m.title,
            description: m.description.unwrap_or_default(),
            due_date: m.due_on,
            state,
        }
    }
}

impl From<GiteaLabel> for Label {
    fn from(l: GiteaLabel) -> Self {
        Self {
            id: l.id,
            name: l.name,
            description: l.description.unwrap_or_default(),
            color: l.color,
        }
    }
}

impl From<GiteaIssue> for Issue {
    fn from(i: GiteaIssue) -> Self {
        let state = match i.state.as_deref() {
            Some("closed") => IssueState::Closed,
            _ => IssueState::Open,
        };
        Self {
            index: i.number,
            title: i.title,
            body: i.body.unwrap_or_default(),
            due_date: i.due_date,
            milestone: i.milestone.map(|m| m.title),
            labels: i
                .labels
                .unwrap_or_default()
                .into_iter()
                .map(|l| l.name)
                .collect(),
            state,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct CreateMilestoneOption<'a> {
    title: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_on: Option<DateTime<Utc>>,
}

impl<'a> From<&'a NewMilestone> for CreateMilestoneOption<'a> {
    fn from(m: &'a NewMilestone) -> Self {
        Self {
            title: &m.title,
            description: &m.description,
            due_on: m.due_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct CreateLabelOption<'a> {
    name: &'a str,
    color: &'a str,
    description: &'a str,
}

impl<'a> From<&'a NewLabel> for CreateLabelOption<'a> {
    fn from(l: &'a NewLabel) -> Self {
        Self {
            name: &l.name,
            color: &l.color,
            description: &l.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct CreateIssueOption<'a> {
    title: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    milestone: Option<i64>,
    labels: &'a [i64],
}

impl<'a> From<&'a IssuePayload> for CreateIssueOption<'a> {
    fn from(i: &'a IssuePayload) -> Self {
        Self {
            title: &i.title,
            body: &i.body,
            due_date: i.due_date,
            milestone: i.milestone_id,
            labels: &i.label_ids,
        }
    }
}

/// Partial update; Gitea treats milestone `0` as "no milestone".
#[derive(Debug, Serialize)]
pub(super) struct EditIssueOption<'a> {
    title: &'a str,
    body: &'a str,
    milestone: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date: Option<DateTime<Utc>>,
    unset_due_date: bool,
}

impl<'a> From<&'a IssuePayload> for EditIssueOption<'a> {
    fn from(i: &'a IssuePayload) -> Self {
        Self {
            title: &i.title,
            body: &i.body,
            milestone: i.milestone_id.unwrap_or(0),
            due_date: i.due_date,
            unset_due_date: i.due_date.is_none(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct IssueLabelsOption<'a> {
    pub(super) labels: &'a [i64],
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(milestone_id: Option<i64>) -> IssuePayload {
        IssuePayload {
            title: "Bug A".to_string(),
            body: "body".to_string(),
            due_date: None,
            milestone_id,
            label_ids: vec![3, 5],
        }
    }

    #[test]
    fn edit_without_milestone_clears_it() {
        let payload = payload(None);
        let value = serde_json::to_value(EditIssueOption::from(&payload)).unwrap();

        assert_eq!(
            value,
            json!({
                "title": "Bug A",
                "body": "body",
                "milestone": 0,
                "unset_due_date": true
            })
        );
    }

    #[test]
    fn create_omits_missing_milestone() {
        let payload = payload(None);
        let value = serde_json::to_value(CreateIssueOption::from(&payload)).unwrap();

        assert_eq!(
            value,
            json!({ "title": "Bug A", "body": "body", "labels": [3, 5] })
        );
    }

    #[test]
    fn converts_closed_issue() {
        let raw: GiteaIssue = serde_json::from_value(json!({
            "number": 42,
            "title": "Bug A",
            "body": "",
            "state": "closed",
            "due_date": null,
            "milestone": { "id": 1, "title": "v1" },
            "labels": [{ "id": 2, "name": "bug", "color": "ee0701" }]
        }))
        .unwrap();

        let issue = Issue::from(raw);
        assert_eq!(issue.index, 42);
        assert_eq!(issue.state, IssueState::Closed);
        assert_eq!(issue.milestone.as_deref(), Some("v1"));
        assert_eq!(issue.labels, vec!["bug".to_string()]);
    }
}
