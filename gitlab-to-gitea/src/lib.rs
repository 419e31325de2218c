#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod api;
pub mod config;
pub mod destination;
pub mod engine;
pub mod gitea;
pub mod gitlab;
pub mod lookup;
pub mod matching;
pub mod model;
pub mod pagination;
pub mod report;
pub mod resolve;
pub mod runner;
pub mod source;
pub mod summary;

pub use api::ApiError;
pub use config::{ConfigError, ProjectPath, Settings};
pub use destination::{Destination, DestinationReader, IssuePayload, NewLabel, NewMilestone};
pub use engine::{MigrationError, MigrationOptions, Migrator, Phase, RunState};
pub use gitea::{GiteaClient, GiteaDestination};
pub use gitlab::{GitLabClient, GitLabSource};
pub use lookup::{Keyed, LookupTable};
pub use matching::MatchStrategy;
pub use model::{Issue, IssueState, Label, Milestone, MilestoneState, SourceIssue};
pub use pagination::{PageRequest, Pager, DESTINATION_PAGE_SIZE, SOURCE_PAGE_SIZE};
pub use report::{MigrationEvent, RecordingReporter, Reporter, TracingReporter};
pub use resolve::{resolve_references, Resolution, ResolutionWarning, WarningKind};
pub use runner::{Runner, RunnerConfig, RunnerError, SetupError};
pub use source::SourceReader;
pub use summary::RunSummary;
