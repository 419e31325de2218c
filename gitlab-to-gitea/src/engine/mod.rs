//! The migration engine.
//!
//! A run has three strictly ordered phases: milestones, labels, issues.
//! Destination state is snapshotted once at the start of each phase and
//! never refreshed while the phase runs; source listings are streamed page by
//! page. The first failed remote call aborts the run. Nothing is rolled back,
//! and re-running relies on create-if-absent and create-or-update to avoid
//! duplicates.

mod error;
mod options;
mod phase;

pub use error::MigrationError;
pub use options::MigrationOptions;
pub use phase::{Phase, RunState};

use crate::destination::{Destination, DestinationReader, IssuePayload, NewLabel, NewMilestone};
use crate::lookup::LookupTable;
use crate::model::{Issue, Label, Milestone, MilestoneState, SourceIssue};
use crate::pagination::{Pager, SOURCE_PAGE_SIZE};
use crate::report::{MigrationEvent, Reporter};
use crate::resolve::resolve_references;
use crate::source::SourceReader;
use crate::summary::RunSummary;
use futures::TryStreamExt;
use std::pin::pin;
use tracing::{info_span, Instrument};

/// Milestones and labels a dry run would have created.
///
/// They carry negative placeholder IDs so the issues phase resolves
/// references to them as a live run would.
#[derive(Default)]
struct DryRunPlan {
    milestones: Vec<Milestone>,
    labels: Vec<Label>,
}

impl DryRunPlan {
    fn next_id(&self) -> i64 {
        -((self.milestones.len() + self.labels.len()) as i64 + 1)
    }

    fn plan_milestone(&mut self, new: &NewMilestone) {
        let id = self.next_id();
        self.milestones.push(Milestone {
            id,
            title: new.title.clone(),
            description: new.description.clone(),
            due_date: new.due_date,
            state: MilestoneState::Active,
        });
    }

    fn plan_label(&mut self, new: &NewLabel) {
        let id = self.next_id();
        self.labels.push(Label {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            color: new.color.clone(),
        });
    }
}

/// Destination snapshots used while migrating issues.
struct IssueTables {
    issues: LookupTable<Issue>,
    milestones: LookupTable<Milestone>,
    labels: LookupTable<Label>,
}

/// Runs a migration from a [`SourceReader`] into a [`Destination`].
pub struct Migrator<S, D, R> {
    source: S,
    destination: D,
    reporter: R,
    options: MigrationOptions,
    state: RunState,
}

impl<S, D, R> Migrator<S, D, R>
where
    S: SourceReader,
    D: Destination,
    R: Reporter,
{
    /// Creates an engine. Nothing is fetched until [`Migrator::run`].
    pub fn new(source: S, destination: D, reporter: R, options: MigrationOptions) -> Self {
        Self {
            source,
            destination,
            reporter,
            options,
            state: RunState::Init,
        }
    }

    /// Current position in the run state machine.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The options this engine runs with.
    #[must_use]
    pub fn options(&self) -> &MigrationOptions {
        &self.options
    }

    /// The source being read.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The destination being written.
    pub fn destination(&self) -> &D {
        &self.destination
    }

    /// The reporter events are sent to.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Executes all phases in order.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError`] naming the phase and operation of the first
    /// failed remote call. The remaining phases are not run.
    pub async fn run(&mut self) -> Result<RunSummary, MigrationError> {
        let mut summary = RunSummary::new(self.options.dry_run);
        let mut plan = DryRunPlan::default();

        for phase in Phase::ALL {
            self.state = RunState::Running(phase);
            self.emit(&mut summary, MigrationEvent::PhaseStarted { phase });

            let span = info_span!("phase", %phase);
            let result = match phase {
                Phase::Milestones => {
                    self.migrate_milestones(&mut summary, &mut plan)
                        .instrument(span)
                        .await
                }
                Phase::Labels => {
                    self.migrate_labels(&mut summary, &mut plan)
                        .instrument(span)
                        .await
                }
                Phase::Issues => {
                    self.migrate_issues(&mut summary, &plan)
                        .instrument(span)
                        .await
                }
            };

            if let Err(e) = result {
                self.state = RunState::Failed(phase);
                return Err(e);
            }
            self.emit(&mut summary, MigrationEvent::PhaseCompleted { phase });
        }

        self.state = RunState::Done;
        Ok(summary)
    }

    fn emit(&self, summary: &mut RunSummary, event: MigrationEvent) {
        summary.record(&event);
        self.reporter.report(&event);
    }

    async fn migrate_milestones(
        &self,
        summary: &mut RunSummary,
        plan: &mut DryRunPlan,
    ) -> Result<(), MigrationError> {
        let phase = Phase::Milestones;
        let existing = DestinationReader::new(&self.destination)
            .list_all_milestones()
            .await
            .map_err(|e| MigrationError::phase(phase, "listing destination milestones", e))?;

        let source = &self.source;
        let mut pages = pin!(Pager::new(SOURCE_PAGE_SIZE)
            .into_stream(move |page| source.list_open_milestones(page)));

        while let Some(page) = pages
            .try_next()
            .await
            .map_err(|e| MigrationError::phase(phase, "listing source milestones", e))?
        {
            for milestone in page {
                if existing.contains(&milestone.title) {
                    self.emit(
                        summary,
                        MigrationEvent::MilestoneSkipped {
                            title: milestone.title,
                        },
                    );
                    continue;
                }

                let new = NewMilestone::from(&milestone);
                if self.options.dry_run {
                    plan.plan_milestone(&new);
                } else {
                    self.destination
                        .create_milestone(&new)
                        .await
                        .map_err(|e| MigrationError::phase(phase, "creating milestone", e))?;
                }
                self.emit(summary, MigrationEvent::MilestoneCreated { title: new.title });
            }
        }

        Ok(())
    }

    async fn migrate_labels(
        &self,
        summary: &mut RunSummary,
        plan: &mut DryRunPlan,
    ) -> Result<(), MigrationError> {
        let phase = Phase::Labels;
        let existing = DestinationReader::new(&self.destination)
            .list_all_labels()
            .await
            .map_err(|e| MigrationError::phase(phase, "listing destination labels", e))?;

        let source = &self.source;
        let mut pages =
            pin!(Pager::new(SOURCE_PAGE_SIZE).into_stream(move |page| source.list_labels(page)));

        while let Some(page) = pages
            .try_next()
            .await
            .map_err(|e| MigrationError::phase(phase, "listing source labels", e))?
        {
            for label in page {
                if existing.contains(&label.name) {
                    self.emit(summary, MigrationEvent::LabelSkipped { name: label.name });
                    continue;
                }

                let new = NewLabel::from(&label);
                if self.options.dry_run {
                    plan.plan_label(&new);
                } else {
                    self.destination
                        .create_label(&new)
                        .await
                        .map_err(|e| MigrationError::phase(phase, "creating label", e))?;
                }
                self.emit(
                    summary,
                    MigrationEvent::LabelCreated {
                        name: new.name,
                        color: new.color,
                    },
                );
            }
        }

        Ok(())
    }

    async fn migrate_issues(
        &self,
        summary: &mut RunSummary,
        plan: &DryRunPlan,
    ) -> Result<(), MigrationError> {
        let phase = Phase::Issues;
        let reader = DestinationReader::new(&self.destination);
        let mut tables = IssueTables {
            issues: reader
                .list_all_issues(self.options.match_strategy)
                .await
                .map_err(|e| MigrationError::phase(phase, "listing destination issues", e))?,
            milestones: reader
                .list_all_milestones()
                .await
                .map_err(|e| MigrationError::phase(phase, "listing destination milestones", e))?,
            labels: reader
                .list_all_labels()
                .await
                .map_err(|e| MigrationError::phase(phase, "listing destination labels", e))?,
        };
        for milestone in &plan.milestones {
            tables.milestones.insert_if_absent(milestone.clone());
        }
        for label in &plan.labels {
            tables.labels.insert_if_absent(label.clone());
        }

        let source = &self.source;
        let mut pages = pin!(Pager::new(SOURCE_PAGE_SIZE)
            .into_stream(move |page| source.list_open_issues(page)));

        while let Some(page) = pages
            .try_next()
            .await
            .map_err(|e| MigrationError::phase(phase, "listing source issues", e))?
        {
            for issue in &page {
                self.migrate_issue(issue, &tables, summary).await?;
            }
        }

        Ok(())
    }

    async fn migrate_issue(
        &self,
        issue: &SourceIssue,
        tables: &IssueTables,
        summary: &mut RunSummary,
    ) -> Result<(), MigrationError> {
        let phase = Phase::Issues;
        let strategy = self.options.match_strategy;
        let resolution = resolve_references(issue, &tables.milestones, &tables.labels);

        for warning in resolution.warnings {
            self.emit(
                summary,
                MigrationEvent::UnresolvedReference {
                    issue: issue.title.clone(),
                    warning,
                },
            );
        }

        let payload = IssuePayload {
            title: issue.title.clone(),
            body: strategy.body_for(issue),
            due_date: issue.due_date,
            milestone_id: resolution.milestone_id,
            label_ids: resolution.label_ids,
        };

        let Some(existing) = tables.issues.get(&strategy.source_key(issue)) else {
            if !self.options.dry_run {
                self.destination
                    .create_issue(&payload)
                    .await
                    .map_err(|e| MigrationError::phase(phase, "creating issue", e))?;
            }
            self.emit(summary, MigrationEvent::IssueCreated { title: payload.title });
            return Ok(());
        };

        let index = existing.index;
        if !self.options.dry_run {
            self.destination
                .edit_issue(index, &payload)
                .await
                .map_err(|e| MigrationError::phase(phase, "editing issue", e))?;
            self.replace_labels(index, &payload, summary).await?;
        }
        self.emit(
            summary,
            MigrationEvent::IssueUpdated {
                title: payload.title,
                index,
            },
        );
        Ok(())
    }

    /// Second half of an issue update. Each failure is reported before the
    /// next attempt; the last one aborts the run.
    async fn replace_labels(
        &self,
        index: u64,
        payload: &IssuePayload,
        summary: &mut RunSummary,
    ) -> Result<(), MigrationError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let error = match self
                .destination
                .replace_issue_labels(index, &payload.label_ids)
                .await
            {
                Ok(_) => return Ok(()),
                Err(e) => e,
            };

            self.emit(
                summary,
                MigrationEvent::LabelReplaceFailed {
                    title: payload.title.clone(),
                    index,
                    attempt,
                    error: error.to_string(),
                },
            );

            if attempt > self.options.label_retries {
                return Err(MigrationError::phase(
                    Phase::Issues,
                    "replacing issue labels",
                    error,
                ));
            }
        }
    }
}
