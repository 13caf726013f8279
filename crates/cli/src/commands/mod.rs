//! Command implementations.

pub mod calculate;
pub mod shipping;

use bidua_core::calculator::CalculatorError;

/// Failures surfaced to the user as a one-line error.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("{0} already exists (use --force to overwrite)")]
    Exists(String),
    #[error("invalid recipe: {0}")]
    Recipe(#[from] serde_yaml::Error),
    #[error(transparent)]
    Calculator(#[from] CalculatorError),
    #[error("could not encode output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not write output: {0}")]
    Stdout(#[from] std::io::Error),
}
