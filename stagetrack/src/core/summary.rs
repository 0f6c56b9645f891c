//! Point-in-time summaries of a stage.

use super::{StageName, Status, Step};
use crate::errors::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// A read-only snapshot of a stage's aggregate status and step counts.
///
/// Produced by [`Stage::summary`](super::Stage::summary). The summary does not
/// follow later appends to the stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSummary<TName> {
    /// The stage identifier.
    pub name: TName,
    /// The aggregate status at the time of the snapshot.
    pub status: Status,
    /// Total number of recorded steps.
    pub total_steps: usize,
    /// Number of steps per status. Statuses with no steps are absent.
    pub counts: BTreeMap<Status, usize>,
}

impl<TName: StageName> StageSummary<TName> {
    pub(crate) fn from_steps(name: TName, status: Status, steps: &[Step]) -> Self {
        let mut counts = BTreeMap::new();
        for step in steps {
            *counts.entry(step.status()).or_insert(0) += 1;
        }

        Self {
            name,
            status,
            total_steps: steps.len(),
            counts,
        }
    }

    /// Returns the number of steps recorded with `status`.
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Returns true unless the aggregate status is `Error` or `Canceled`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        !self.status.is_failure()
    }
}

impl<TName: StageName + Serialize> StageSummary<TName> {
    /// Serializes the summary to a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
