//! Test fixtures for stages.

use crate::core::{Stage, StageName};
use serde::Serialize;

/// Stage identifiers for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureStage {
    /// First stage.
    First,
    /// Second stage.
    Second,
    /// Third stage.
    Third,
}

impl StageName for FixtureStage {}

/// Payload carried by fixture stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureData {
    /// Free-form label.
    pub label: String,
}

impl FixtureData {
    /// Creates fixture data with a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Creates an empty [`FixtureStage::First`] stage with default data.
#[must_use]
pub fn fixture_stage() -> Stage<FixtureData, FixtureStage> {
    Stage::new(FixtureData::default(), FixtureStage::First)
}
