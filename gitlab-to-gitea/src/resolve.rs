//! Maps a source issue's named references onto destination IDs.

use crate::lookup::LookupTable;
use crate::model::{Label, Milestone, SourceIssue};
use serde::Serialize;
use std::fmt;

/// Kind of reference that could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// The milestone title does not exist on the destination.
    UnknownMilestone,
    /// The label name does not exist on the destination.
    UnknownLabel,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMilestone => write!(f, "unknown-milestone"),
            Self::UnknownLabel => write!(f, "unknown-label"),
        }
    }
}

/// A reference dropped during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionWarning {
    /// What kind of reference it was.
    pub kind: WarningKind,
    /// The unresolved milestone title or label name.
    pub value: String,
}

/// Destination IDs for an issue's references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Destination milestone ID, if the milestone was found.
    pub milestone_id: Option<i64>,
    /// Destination label IDs, in source order, unknown labels omitted.
    pub label_ids: Vec<i64>,
    /// One entry per dropped reference.
    pub warnings: Vec<ResolutionWarning>,
}

/// Resolves milestone and label references of `issue` against destination tables.
///
/// Never fails: unknown references are dropped and reported as warnings.
#[must_use]
pub fn resolve_references(
    issue: &SourceIssue,
    milestones: &LookupTable<Milestone>,
    labels: &LookupTable<Label>,
) -> Resolution {
    let mut resolution = Resolution::default();

    if let Some(title) = &issue.milestone {
        match milestones.get(title) {
            Some(milestone) => resolution.milestone_id = Some(milestone.id),
            None => resolution.warnings.push(ResolutionWarning {
                kind: WarningKind::UnknownMilestone,
                value: title.clone(),
            }),
        }
    }

    for name in &issue.labels {
        match labels.get(name) {
            Some(label) => resolution.label_ids.push(label.id),
            None => resolution.warnings.push(ResolutionWarning {
                kind: WarningKind::UnknownLabel,
                value: name.clone(),
            }),
        }
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MilestoneState;

    fn issue(milestone: Option<&str>, labels: &[&str]) -> SourceIssue {
        SourceIssue {
            iid: 1,
            title: "Bug A".to_string(),
            body: String::new(),
            due_date: None,
            milestone: milestone.map(str::to_string),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn milestones() -> LookupTable<Milestone> {
        LookupTable::from_entries(vec![Milestone {
            id: 10,
            title: "v1".to_string(),
            description: String::new(),
            due_date: None,
            state: MilestoneState::Closed,
        }])
    }

    fn labels() -> LookupTable<Label> {
        ["bug", "ui"]
            .iter()
            .enumerate()
            .map(|(i, name)| Label {
                id: i as i64 + 1,
                name: name.to_string(),
                description: String::new(),
                color: "#000000".to_string(),
            })
            .collect()
    }

    #[test]
    fn resolves_known_references() {
        let resolution = resolve_references(
            &issue(Some("v1"), &["ui", "bug"]),
            &milestones(),
            &labels(),
        );

        assert_eq!(resolution.milestone_id, Some(10));
        assert_eq!(resolution.label_ids, vec![2, 1]);
        assert!(resolution.warnings.is_empty());
    }

    #[test]
    fn unknown_milestone_yields_one_warning() {
        let resolution = resolve_references(&issue(Some("v9"), &[]), &milestones(), &labels());

        assert_eq!(resolution.milestone_id, None);
        assert_eq!(
            resolution.warnings,
            vec![ResolutionWarning {
                kind: WarningKind::UnknownMilestone,
                value: "v9".to_string(),
            }]
        );
    }

    #[test]
    fn unknown_label_is_dropped() {
        let resolution = resolve_references(
            &issue(None, &["bug", "wontfix"]),
            &milestones(),
            &labels(),
        );

        assert_eq!(resolution.label_ids, vec![1]);
        assert_eq!(resolution.warnings.len(), 1);
        assert_eq!(resolution.warnings[0].kind, WarningKind::UnknownLabel);
        assert_eq!(resolution.warnings[0].value, "wontfix");
    }

    #[test]
    fn issue_without_references_resolves_empty() {
        let resolution = resolve_references(&issue(None, &[]), &milestones(), &labels());
        assert_eq!(resolution, Resolution::default());
    }
}
