//! Project path parsing.

use crate::config::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A `namespace/name` project path.
///
/// GitLab allows nested groups, so the source path may have more than two
/// segments. Gitea repositories are always `owner/name`; see
/// [`ProjectPath::owner_and_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectPath(String);

impl ProjectPath {
    /// The full path, e.g. `group/subgroup/project`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits a two-segment path into owner and repository name.
    ///
    /// Returns `None` for nested paths, which Gitea cannot address.
    #[must_use]
    pub fn owner_and_name(&self) -> Option<(&str, &str)> {
        let (owner, name) = self.0.split_once('/')?;
        (!name.contains('/')).then_some((owner, name))
    }
}

impl FromStr for ProjectPath {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        let segments: Vec<&str> = trimmed.split('/').collect();
        if segments.len() < 2 {
            return Err(ConfigError::invalid(
                "project",
                format!("'{s}' is not of the form namespace/name"),
            ));
        }
        if segments.iter().any(|segment| segment.trim().is_empty()) {
            return Err(ConfigError::invalid(
                "project",
                format!("'{s}' contains an empty path segment"),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_path() {
        let path: ProjectPath = "group/sub/project".parse().unwrap();
        assert_eq!(path.as_str(), "group/sub/project");
        assert_eq!(path.owner_and_name(), None);
    }

    #[test]
    fn splits_owner_and_name() {
        let path: ProjectPath = "/acme/widgets/".parse().unwrap();
        assert_eq!(path.owner_and_name(), Some(("acme", "widgets")));
    }

    #[test]
    fn rejects_single_segment() {
        let result = "widgets".parse::<ProjectPath>();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn rejects_empty_segment() {
        assert!("acme//widgets".parse::<ProjectPath>().is_err());
    }
}
