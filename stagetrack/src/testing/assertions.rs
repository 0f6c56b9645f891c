//! Test assertions for stages.

use crate::core::{Stage, StageName, Status};

/// Asserts that the stage has no failed or canceled step.
pub fn assert_stage_succeeded<TData, TName: StageName>(stage: &Stage<TData, TName>) {
    assert!(
        stage.is_success(),
        "Expected {:?} to succeed, got status: {:?}",
        stage.name(),
        stage.status()
    );
}

/// Asserts that the stage has at least one failed step.
pub fn assert_stage_failed<TData, TName: StageName>(stage: &Stage<TData, TName>) {
    assert!(
        stage.is_error(),
        "Expected {:?} to contain an error step, got status: {:?}",
        stage.name(),
        stage.status()
    );
}

/// Asserts that the stage has at least one canceled step.
pub fn assert_stage_canceled<TData, TName: StageName>(stage: &Stage<TData, TName>) {
    assert!(
        stage.is_canceled(),
        "Expected {:?} to contain a canceled step, got status: {:?}",
        stage.name(),
        stage.status()
    );
}

/// Asserts that the stage has the expected aggregate status.
pub fn assert_stage_status<TData, TName: StageName>(
    stage: &Stage<TData, TName>,
    expected: Status,
) {
    assert_eq!(
        stage.status(),
        expected,
        "Expected {:?} to have status {:?}, got {:?}",
        stage.name(),
        expected,
        stage.status()
    );
}

/// Asserts that the stage holds `expected` steps with `status`.
pub fn assert_step_count<TData, TName: StageName>(
    stage: &Stage<TData, TName>,
    status: Status,
    expected: usize,
) {
    let actual = stage.steps_by_status(status).count();
    assert_eq!(
        actual, expected,
        "Expected {} {:?} step(s) in {:?}, got {}",
        expected,
        status,
        stage.name(),
        actual
    );
}
