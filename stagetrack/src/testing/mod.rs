//! Testing utilities for code that records steps on stages.
//!
//! This module provides:
//! - Assertions on a stage's aggregate status and step counts
//! - A fixture stage identifier and payload

mod assertions;
mod fixtures;

pub use assertions::{
    assert_stage_canceled, assert_stage_failed, assert_stage_status, assert_stage_succeeded,
    assert_step_count,
};
pub use fixtures::{fixture_stage, FixtureData, FixtureStage};
