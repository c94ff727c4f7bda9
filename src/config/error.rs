//! Configuration loading error types.

use thiserror::Error;

/// Errors raised while loading the engine configuration.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("I/O error reading config: {0}")]
    Io(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
