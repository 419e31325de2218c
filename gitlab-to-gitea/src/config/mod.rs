//! Configuration loading and validation.
//!
//! Settings come from up to three layers: an optional TOML file, the token
//! environment variables, and command-line flags. The CLI merges them in that
//! order and hands the result to [`crate::RunnerConfig::from_settings`].

mod error;
mod project;
mod settings;

pub use error::ConfigError;
pub use project::ProjectPath;
pub use settings::{EndpointSettings, OptionSettings, Settings, GITEA_TOKEN_ENV, GITLAB_TOKEN_ENV};

use url::Url;

/// Checks that `value` is an absolute http(s) URL.
pub(crate) fn parse_server(field: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::invalid(field, e.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(ConfigError::invalid(
            field,
            format!("'{value}' is not an http(s) URL"),
        )),
    }
}

/// Requires a non-blank value.
pub(crate) fn require(field: &str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(ConfigError::invalid(field, "must not be empty")),
        None => Err(ConfigError::MissingValue {
            field: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_server() {
        let url = parse_server("gitea.server", "https://gitea.example.com/").unwrap();
        assert_eq!(url.host_str(), Some("gitea.example.com"));
    }

    #[test]
    fn rejects_non_http_server() {
        let result = parse_server("gitea.server", "ftp://gitea.example.com/");
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn require_rejects_blank() {
        assert!(matches!(
            require("gitlab.token", Some("  ".to_string())),
            Err(ConfigError::ValidationError { .. })
        ));
        assert!(matches!(
            require("gitlab.token", None),
            Err(ConfigError::MissingValue { .. })
        ));
    }
}
