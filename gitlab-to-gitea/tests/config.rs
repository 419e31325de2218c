use std::path::PathBuf;

use gitlab_to_gitea::config::{EndpointSettings, GITEA_TOKEN_ENV, GITLAB_TOKEN_ENV};
use gitlab_to_gitea::{ConfigError, MatchStrategy, RunnerConfig, Settings};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/settings")
        .join(name)
}

#[test]
fn file_and_environment_build_a_config() {
    temp_env::with_vars(
        [(GITLAB_TOKEN_ENV, Some("lab")), (GITEA_TOKEN_ENV, Some("tea"))],
        || {
            let settings = Settings::load(&fixture("full.toml"))
                .unwrap()
                .merge(Settings::from_env());
            let config = RunnerConfig::from_settings(settings).unwrap();

            assert_eq!(config.gitlab_token(), "lab");
            assert_eq!(config.gitea_token(), "tea");
            assert_eq!(config.gitlab_project().as_str(), "acme/widgets");
            assert_eq!(config.gitea_project().as_str(), "acme-mirror/widgets");
            assert_eq!(config.options().match_strategy, MatchStrategy::SourceTag);
            assert_eq!(config.options().label_retries, 2);
            assert!(!config.dry_run());
        },
    );
}

#[test]
fn flags_override_environment_and_file() {
    temp_env::with_vars(
        [(GITLAB_TOKEN_ENV, Some("env")), (GITEA_TOKEN_ENV, Some("tea"))],
        || {
            let flags = Settings {
                gitlab: EndpointSettings {
                    token: Some("flag".to_string()),
                    ..Default::default()
                },
                ..Default::default()
            };
            let settings = Settings::load(&fixture("full.toml"))
                .unwrap()
                .merge(Settings::from_env())
                .merge(flags);

            let config = RunnerConfig::from_settings(settings).unwrap();
            assert_eq!(config.gitlab_token(), "flag");
        },
    );
}

#[test]
fn missing_tokens_are_reported() {
    temp_env::with_vars_unset([GITLAB_TOKEN_ENV, GITEA_TOKEN_ENV], || {
        let settings = Settings::load(&fixture("full.toml"))
            .unwrap()
            .merge(Settings::from_env());

        let result = RunnerConfig::from_settings(settings);
        assert!(matches!(
            result,
            Err(ConfigError::MissingValue { ref field }) if field == "gitlab.token"
        ));
    });
}

#[test]
fn nested_source_cannot_be_the_destination() {
    let settings = Settings::load(&fixture("nested-source.toml")).unwrap();
    let result = RunnerConfig::from_settings(settings);

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn unknown_keys_are_rejected() {
    let result = Settings::load(&fixture("unknown-key.toml"));
    assert!(matches!(result, Err(ConfigError::TomlError { .. })));
}
