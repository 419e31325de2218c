//! Domain types shared by the readers, the resolver and the engine.
//!
//! These are read-only projections of remote resources. Wire formats of the
//! individual services live next to their clients and convert into these.

mod issue;
mod label;
mod milestone;

pub use issue::{Issue, IssueState, SourceIssue};
pub use label::Label;
pub use milestone::{Milestone, MilestoneState};
