//! Logging utilities.
//!
//! Centralizes `env_logger` initialization behind the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
