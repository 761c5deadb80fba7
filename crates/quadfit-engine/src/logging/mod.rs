//! Logger initialization.
//!
//! Everything in the crate logs through the `log` facade; `env_logger` is the
//! backend installed here.

mod init;

pub use init::{DEFAULT_FILTER, LoggingConfig, init_logging};
