// File: crates/hoverplot-core/src/error.rs
// Summary: Error type for the fallible edges of the core (dataset parsing, configuration).
// Rendering itself never fails: bad data degrades into empty or degenerate shapes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// The top-level object does not carry the expected row array.
    #[error("dataset has no `{key}` array")]
    InvalidDatasetShape { key: &'static str },
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid color `{0}`")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
