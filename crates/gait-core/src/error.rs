//! Error type for the fallible edges of the workspace.
//!
//! Steering itself cannot fail; only loading and validating tuning data can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GaitError {
    #[error("failed to parse steering config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid steering config: `{field}` {reason} (got {value})")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
        value: f64,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GaitError>;
