//! # Stagetrack
//!
//! Step outcome tracking for pipeline stages.
//!
//! A [`Stage`](core::Stage) collects [`Step`](core::Step)s as work proceeds
//! and reports a single worst-case [`Status`](core::Status) for the whole
//! stage:
//!
//! - **Ranked statuses**: every status has a fixed severity rank
//! - **Immutable steps**: one factory per outcome, value equality
//! - **Derived aggregate**: the stage status is recomputed from its steps on
//!   every query and never cached
//!
//! ## Quick Start
//!
//! ```rust
//! use stagetrack::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Signup {
//!     Validation,
//!     Persist,
//! }
//!
//! impl StageName for Signup {}
//!
//! let mut validation = Stage::new("alice@example.com", Signup::Validation);
//! validation.add_success_named("address is well formed", "Validation.Email");
//! validation.add_in_adjustment_named("display name trimmed", "Validation.Name");
//!
//! assert_eq!(validation.status(), Status::InAdjustment);
//! assert!(validation.is_success());
//!
//! validation.add_canceled("user left the form");
//! assert_eq!(validation.status(), Status::Canceled);
//! assert!(validation.is_error_or_canceled());
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod core;
pub mod errors;
pub mod observability;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{Stage, StageName, StageSummary, Status, Step, DEFAULT_STEP_NAME};
    pub use crate::errors::{Result, StagetrackError, StatusParseError};
    pub use crate::observability::{init_logging, LogFormat, LoggingConfig};
}
