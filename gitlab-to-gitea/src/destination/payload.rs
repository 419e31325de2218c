//! Request bodies for destination mutations.

use crate::model::{Label, Milestone};
use chrono::{DateTime, Utc};

/// Fields of a milestone to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMilestone {
    /// Milestone title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Optional deadline.
    pub due_date: Option<DateTime<Utc>>,
}

impl From<&Milestone> for NewMilestone {
    fn from(m: &Milestone) -> Self {
        Self {
            title: m.title.clone(),
            description: m.description.clone(),
            due_date: m.due_date,
        }
    }
}

/// Fields of a label to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLabel {
    /// Label name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Hex color triplet.
    pub color: String,
}

impl From<&Label> for NewLabel {
    fn from(l: &Label) -> Self {
        Self {
            name: l.name.clone(),
            description: l.description.clone(),
            color: l.color.clone(),
        }
    }
}

/// Target state of a destination issue, used both to create and to edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuePayload {
    /// Issue title.
    pub title: String,
    /// Markdown body.
    pub body: String,
    /// Deadline; `None` clears it on edit.
    pub due_date: Option<DateTime<Utc>>,
    /// Destination milestone ID; `None` unlinks on edit.
    pub milestone_id: Option<i64>,
    /// Destination label IDs, in source order.
    pub label_ids: Vec<i64>,
}
