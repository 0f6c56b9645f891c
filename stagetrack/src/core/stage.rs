//! The stage container and its aggregate status.

use super::{StageSummary, Status, Step};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Identifies which logical stage a [`Stage`] represents.
///
/// Implement this on a fieldless enum owned by the calling pipeline:
///
/// ```
/// use stagetrack::core::StageName;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Checkout {
///     Validation,
///     Persist,
/// }
///
/// impl StageName for Checkout {}
/// ```
///
/// The stage stores and returns the value but never inspects it.
pub trait StageName: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

/// An append-only list of steps for one stage of a pipeline.
///
/// A stage owns a caller-supplied payload (`TData`) and identifier (`TName`),
/// both fixed at construction. Its status is recomputed from the recorded
/// steps on every query and is the most critical status among them.
///
/// `Stage` performs no synchronization. Callers sharing a stage between
/// threads or tasks wrap it in a mutex of their choosing.
///
/// # Examples
///
/// ```
/// use stagetrack::core::{Stage, StageName, Status};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Import {
///     Parse,
/// }
///
/// impl StageName for Import {}
///
/// let mut stage = Stage::new(vec!["a,b", "c,d"], Import::Parse);
/// stage.add_success("header read");
/// stage.add_error_named("column count mismatch", "Parse.Row");
///
/// assert_eq!(stage.status(), Status::Error);
/// assert!(stage.is_error());
/// assert!(!stage.is_success());
/// ```
#[derive(Debug, Clone)]
pub struct Stage<TData, TName: StageName> {
    data: TData,
    name: TName,
    steps: Vec<Step>,
}

impl<TData, TName: StageName> Stage<TData, TName> {
    /// Creates an empty stage for `data`, identified by `name`.
    #[must_use]
    pub const fn new(data: TData, name: TName) -> Self {
        Self {
            data,
            name,
            steps: Vec::new(),
        }
    }

    /// Returns the stage payload.
    #[must_use]
    pub const fn data(&self) -> &TData {
        &self.data
    }

    /// Returns the stage identifier.
    #[must_use]
    pub const fn name(&self) -> TName {
        self.name
    }

    /// Consumes the stage and returns its payload.
    #[must_use]
    pub fn into_data(self) -> TData {
        self.data
    }

    /// Returns the recorded steps in insertion order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no step has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Appends a step.
    pub fn add_step(&mut self, step: Step) {
        debug!(
            stage = ?self.name,
            step = %step.name(),
            status = %step.status(),
            "Step recorded"
        );
        self.steps.push(step);
    }

    /// Appends steps in iteration order.
    pub fn add_range_steps<I>(&mut self, steps: I)
    where
        I: IntoIterator<Item = Step>,
    {
        for step in steps {
            self.add_step(step);
        }
    }

    /// Appends a successful step named [`DEFAULT_STEP_NAME`](super::DEFAULT_STEP_NAME).
    pub fn add_success(&mut self, message: impl Into<String>) {
        self.add_step(Step::success(message));
    }

    /// Appends a successful step.
    pub fn add_success_named(&mut self, message: impl Into<String>, name: impl Into<String>) {
        self.add_step(Step::success_named(message, name));
    }

    /// Appends a failed step named [`DEFAULT_STEP_NAME`](super::DEFAULT_STEP_NAME).
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.add_step(Step::error(message));
    }

    /// Appends a failed step.
    pub fn add_error_named(&mut self, message: impl Into<String>, name: impl Into<String>) {
        self.add_step(Step::error_named(message, name));
    }

    /// Appends a canceled step named [`DEFAULT_STEP_NAME`](super::DEFAULT_STEP_NAME).
    pub fn add_canceled(&mut self, message: impl Into<String>) {
        self.add_step(Step::canceled(message));
    }

    /// Appends a canceled step.
    pub fn add_canceled_named(&mut self, message: impl Into<String>, name: impl Into<String>) {
        self.add_step(Step::canceled_named(message, name));
    }

    /// Appends an in-progress step named [`DEFAULT_STEP_NAME`](super::DEFAULT_STEP_NAME).
    pub fn add_in_progress(&mut self, message: impl Into<String>) {
        self.add_step(Step::in_progress(message));
    }

    /// Appends an in-progress step.
    pub fn add_in_progress_named(&mut self, message: impl Into<String>, name: impl Into<String>) {
        self.add_step(Step::in_progress_named(message, name));
    }

    /// Appends an in-adjustment step named [`DEFAULT_STEP_NAME`](super::DEFAULT_STEP_NAME).
    pub fn add_in_adjustment(&mut self, message: impl Into<String>) {
        self.add_step(Step::in_adjustment(message));
    }

    /// Appends an in-adjustment step.
    pub fn add_in_adjustment_named(
        &mut self,
        message: impl Into<String>,
        name: impl Into<String>,
    ) {
        self.add_step(Step::in_adjustment_named(message, name));
    }

    /// Appends an informational step named [`DEFAULT_STEP_NAME`](super::DEFAULT_STEP_NAME).
    pub fn add_information(&mut self, message: impl Into<String>) {
        self.add_step(Step::information(message));
    }

    /// Appends an informational step.
    pub fn add_information_named(&mut self, message: impl Into<String>, name: impl Into<String>) {
        self.add_step(Step::information_named(message, name));
    }

    /// Returns the step carrying the highest-ranked status, if any.
    ///
    /// When several steps share that status, which one is returned is
    /// unspecified.
    #[must_use]
    pub fn most_critical_step(&self) -> Option<&Step> {
        self.steps.iter().max_by_key(|step| step.status().rank())
    }

    /// Returns the aggregate status of the stage.
    ///
    /// This is [`Status::Default`] for an empty stage and otherwise the
    /// highest-ranked status among the recorded steps.
    #[must_use]
    pub fn status(&self) -> Status {
        self.most_critical_step().map_or(Status::Default, Step::status)
    }

    /// Returns true unless the aggregate status is `Error` or `Canceled`.
    ///
    /// Empty, informational, in-progress and in-adjustment stages all count
    /// as successful so far.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.status().is_failure()
    }

    /// Returns true if any step failed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.has_status(Status::Error)
    }

    /// Returns true if any step was canceled.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.has_status(Status::Canceled)
    }

    /// Returns true if any step failed or was canceled.
    #[must_use]
    pub fn is_error_or_canceled(&self) -> bool {
        self.is_error() || self.is_canceled()
    }

    /// Returns the steps with exactly `status`, in insertion order.
    pub fn steps_by_status(&self, status: Status) -> impl Iterator<Item = &Step> + '_ {
        self.steps.iter().filter(move |step| step.status() == status)
    }

    /// Returns a snapshot of the aggregate status and per-status counts.
    #[must_use]
    pub fn summary(&self) -> StageSummary<TName> {
        StageSummary::from_steps(self.name, self.status(), &self.steps)
    }

    fn has_status(&self, status: Status) -> bool {
        self.steps.iter().any(|step| step.status() == status)
    }
}

impl<TData, TName: StageName> Extend<Step> for Stage<TData, TName> {
    fn extend<I: IntoIterator<Item = Step>>(&mut self, iter: I) {
        self.add_range_steps(iter);
    }
}
