//! Step records with one factory per outcome.

use super::Status;
use serde::Serialize;
use std::fmt;

/// Name given to steps created without an explicit name.
pub const DEFAULT_STEP_NAME: &str = "Generic.Step";

/// A single recorded outcome within a stage.
///
/// `Step` is immutable once created. Steps are only built through the
/// factory methods below, one per outcome, so the status always matches the
/// constructor that produced it. Two steps are equal when their status,
/// message and name are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Step {
    status: Status,
    message: String,
    name: String,
}

impl Step {
    fn new(status: Status, message: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            name: name.into(),
        }
    }

    /// Creates a successful step.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Status::Success, message, DEFAULT_STEP_NAME)
    }

    /// Creates a successful step with an explicit name.
    #[must_use]
    pub fn success_named(message: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Status::Success, message, name)
    }

    /// Creates a failed step.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Status::Error, message, DEFAULT_STEP_NAME)
    }

    /// Creates a failed step with an explicit name.
    #[must_use]
    pub fn error_named(message: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Status::Error, message, name)
    }

    /// Creates a canceled step.
    #[must_use]
    pub fn canceled(message: impl Into<String>) -> Self {
        Self::new(Status::Canceled, message, DEFAULT_STEP_NAME)
    }

    /// Creates a canceled step with an explicit name.
    #[must_use]
    pub fn canceled_named(message: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Status::Canceled, message, name)
    }

    /// Creates an in-progress step.
    #[must_use]
    pub fn in_progress(message: impl Into<String>) -> Self {
        Self::new(Status::InProgress, message, DEFAULT_STEP_NAME)
    }

    /// Creates an in-progress step with an explicit name.
    #[must_use]
    pub fn in_progress_named(message: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Status::InProgress, message, name)
    }

    /// Creates a step that needs adjustment.
    #[must_use]
    pub fn in_adjustment(message: impl Into<String>) -> Self {
        Self::new(Status::InAdjustment, message, DEFAULT_STEP_NAME)
    }

    /// Creates a step that needs adjustment, with an explicit name.
    #[must_use]
    pub fn in_adjustment_named(message: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Status::InAdjustment, message, name)
    }

    /// Creates an informational step.
    #[must_use]
    pub fn information(message: impl Into<String>) -> Self {
        Self::new(Status::Information, message, DEFAULT_STEP_NAME)
    }

    /// Creates an informational step with an explicit name.
    #[must_use]
    pub fn information_named(message: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(Status::Information, message, name)
    }

    /// Returns the step status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the step message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the name of the operation that produced the step.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.name, self.message)
    }
}
