//! Core domain model types for stagetrack.
//!
//! This module contains the aggregation model:
//! - The ranked step status enum
//! - The immutable step record with one factory per outcome
//! - The stage container that derives a worst-case status from its steps
//! - Stage summaries

mod stage;
mod status;
mod step;
mod summary;

pub use stage::{Stage, StageName};
pub use status::Status;
pub use step::{Step, DEFAULT_STEP_NAME};
pub use summary::StageSummary;
