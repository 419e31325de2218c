//! In-memory reporter.

use super::{MigrationEvent, Reporter};
use std::sync::{Mutex, PoisonError};

/// Collects every event for later inspection.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<MigrationEvent>>,
}

impl RecordingReporter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events recorded so far, in order.
    #[must_use]
    pub fn events(&self) -> Vec<MigrationEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: &MigrationEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
