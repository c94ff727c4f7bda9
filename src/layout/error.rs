//! Layout loading error types.

use thiserror::Error;

/// Errors raised while loading or validating a store layout.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("I/O error reading layout: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse layout YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid layout: {0}")]
    Invalid(String),
}
