//! Engine behavior switches.

use crate::matching::MatchStrategy;

/// Options controlling a migration run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationOptions {
    /// Read and resolve everything, but skip every mutating call.
    pub dry_run: bool,
    /// How source issues are matched against destination issues.
    pub match_strategy: MatchStrategy,
    /// Extra attempts for the label replacement step of an issue update.
    pub label_retries: u32,
}

impl MigrationOptions {
    /// Enables or disables dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Sets the issue matching strategy.
    #[must_use]
    pub fn with_match_strategy(mut self, match_strategy: MatchStrategy) -> Self {
        self.match_strategy = match_strategy;
        self
    }

    /// Sets how many times a failed label replacement is retried.
    #[must_use]
    pub fn with_label_retries(mut self, label_retries: u32) -> Self {
        self.label_retries = label_retries;
        self
    }
}
