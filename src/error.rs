//! Error types for starsim.
//!
//! The physics core never fails: coincident bodies and other degenerate
//! geometry are skipped. Errors only come from loading scenarios and from
//! setup/edit requests that carry invalid values.

use thiserror::Error;

use crate::simulation::mode::Mode;

#[derive(Debug, Error)]
pub enum StarsimError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid mass {coefficient}e{exponent}: must be positive and finite")]
    InvalidMass { coefficient: f64, exponent: i32 },

    #[error("Expected 3 components for `{field}`, got {len}")]
    InvalidVector { field: &'static str, len: usize },

    #[error("Invalid color `{0}`")]
    InvalidColor(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("No body at index {0}")]
    UnknownBody(usize),

    #[error("`{operation}` is not available in {mode} mode")]
    WrongMode { operation: &'static str, mode: Mode },
}

pub type Result<T> = std::result::Result<T, StarsimError>;
