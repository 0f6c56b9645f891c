//! Logging setup.
//!
//! The library only emits `tracing` events. Binaries and tests that want to
//! see them install a subscriber through [`init_logging`].

mod logging;

pub use logging::{init_logging, LogFormat, LoggingConfig, FILTER_ENV_VAR, FORMAT_ENV_VAR};
