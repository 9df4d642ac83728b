// File: crates/dashboard-core/src/error.rs
// Summary: Error taxonomy for dataset loading, validation, configuration and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// A `weekEnding` value that is not a recognizable date.
    #[error("record {index}: invalid weekEnding date {value:?}")]
    InvalidDate { index: usize, value: String },

    /// Malformed product JSON, including missing required numeric fields.
    #[error("invalid product dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("invalid sales CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
