//! Global subscriber installation.
//!
//! Kept in its own test binary so no other test shares the process-wide
//! subscriber.

use stagetrack::errors::StagetrackError;
use stagetrack::observability::{init_logging, LogFormat, LoggingConfig};

#[test]
fn test_init_logging_installs_once() {
    let config = LoggingConfig::new()
        .with_filter("stagetrack=debug")
        .with_format(LogFormat::Json);

    init_logging(&config).unwrap();

    let err = init_logging(&config).unwrap_err();
    assert!(matches!(err, StagetrackError::Logging(_)), "{err}");
}
