//! How source issues are paired with destination issues.

use crate::model::{Issue, SourceIssue};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

const TAG_PREFIX: &str = "<!-- gitlab-issue-iid: ";
const TAG_SUFFIX: &str = " -->";

/// Strategy used to decide whether a source issue already exists on the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Match by exact title. Two source issues sharing a title map to the
    /// same destination issue.
    #[default]
    Title,
    /// Match by a hidden marker carrying the source issue number, appended
    /// to every migrated body.
    SourceTag,
}

impl MatchStrategy {
    /// Key under which a source issue is looked up.
    #[must_use]
    pub fn source_key(self, issue: &SourceIssue) -> String {
        match self {
            Self::Title => issue.title.clone(),
            Self::SourceTag => source_tag(issue.iid),
        }
    }

    /// Key under which a destination issue is indexed, if it has one.
    #[must_use]
    pub fn destination_key(self, issue: &Issue) -> Option<String> {
        match self {
            Self::Title => Some(issue.title.clone()),
            Self::SourceTag => parse_source_tag(&issue.body).map(source_tag),
        }
    }

    /// Body written to the destination for a source issue.
    #[must_use]
    pub fn body_for(self, issue: &SourceIssue) -> String {
        match self {
            Self::Title => issue.body.clone(),
            Self::SourceTag if issue.body.is_empty() => source_tag(issue.iid),
            Self::SourceTag => format!("{}\n\n{}", issue.body, source_tag(issue.iid)),
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::SourceTag => write!(f, "source-tag"),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "source-tag" => Ok(Self::SourceTag),
            other => Err(format!(
                "unknown match strategy '{other}', expected 'title' or 'source-tag'"
            )),
        }
    }
}

/// Renders the hidden marker for a source issue number.
#[must_use]
pub fn source_tag(iid: u64) -> String {
    format!("{TAG_PREFIX}{iid}{TAG_SUFFIX}")
}

/// Extracts the source issue number from the last marker in `body`.
#[must_use]
pub fn parse_source_tag(body: &str) -> Option<u64> {
    let start = body.rfind(TAG_PREFIX)? + TAG_PREFIX.len();
    let rest = &body[start..];
    let end = rest.find(TAG_SUFFIX)?;
    rest[..end].trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IssueState;

    fn source(iid: u64, title: &str, body: &str) -> SourceIssue {
        SourceIssue {
            iid,
            title: title.to_string(),
            body: body.to_string(),
            due_date: None,
            milestone: None,
            labels: Vec::new(),
        }
    }

    fn destination(body: &str) -> Issue {
        Issue {
            index: 1,
            title: "Bug A".to_string(),
            body: body.to_string(),
            due_date: None,
            milestone: None,
            labels: Vec::new(),
            state: IssueState::Open,
        }
    }

    #[test]
    fn title_strategy_keeps_body() {
        let issue = source(4, "Bug A", "details");
        assert_eq!(MatchStrategy::Title.body_for(&issue), "details");
        assert_eq!(MatchStrategy::Title.source_key(&issue), "Bug A");
    }

    #[test]
    fn tagged_body_round_trips_through_destination_key() {
        let issue = source(12, "Bug A", "details");
        let body = MatchStrategy::SourceTag.body_for(&issue);

        assert!(body.starts_with("details\n\n"));
        assert_eq!(parse_source_tag(&body), Some(12));
        assert_eq!(
            MatchStrategy::SourceTag.destination_key(&destination(&body)),
            Some(MatchStrategy::SourceTag.source_key(&issue))
        );
    }

    #[test]
    fn untagged_destination_issue_has_no_tag_key() {
        assert_eq!(
            MatchStrategy::SourceTag.destination_key(&destination("plain body")),
            None
        );
    }

    #[test]
    fn last_marker_wins() {
        let body = format!("{}\n{}", source_tag(1), source_tag(2));
        assert_eq!(parse_source_tag(&body), Some(2));
    }

    #[test]
    fn parses_strategy_names() {
        assert_eq!("title".parse::<MatchStrategy>(), Ok(MatchStrategy::Title));
        assert_eq!(
            "source-tag".parse::<MatchStrategy>(),
            Ok(MatchStrategy::SourceTag)
        );
        assert!("iid".parse::<MatchStrategy>().is_err());
        assert_eq!(MatchStrategy::SourceTag.to_string(), "source-tag");
    }
}
