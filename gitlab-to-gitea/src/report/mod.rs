//! Reporting of engine progress.
//!
//! The engine does not log on its own; it hands every [`MigrationEvent`] to
//! the [`Reporter`] it was built with.

mod event;
mod recording;
mod tracing_reporter;

pub use event::MigrationEvent;
pub use recording::RecordingReporter;
pub use tracing_reporter::TracingReporter;

/// Sink for engine events.
pub trait Reporter: Send + Sync {
    /// Handles one event.
    fn report(&self, event: &MigrationEvent);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, event: &MigrationEvent) {
        (**self).report(event);
    }
}

impl<R: Reporter + ?Sized> Reporter for std::sync::Arc<R> {
    fn report(&self, event: &MigrationEvent) {
        (**self).report(event);
    }
}
