//! Typed failures for dataset construction, remote fetches and rendering.
//!
//! Application plumbing (startup, settings) uses `anyhow`; these enums cover
//! the paths whose failures are mapped or surfaced deliberately.

use thiserror::Error;

/// Errors raised while building a [`TabularDataset`](crate::dataset::TabularDataset).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("row {row} has {found} values, expected {expected}")]
    Arity {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("dataset has no columns")]
    NoColumns,
}

/// Everything that can go wrong between a source identifier and a parsed dataset.
///
/// None of these reach a caller of `Provisioner::resolve`; they are logged and
/// replaced by the fallback dataset.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid source identifier `{source_id}`: {reason}")]
    InvalidSource { source_id: String, reason: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV has no header row")]
    NoHeader,

    #[error("no data rows after parsing")]
    Empty,

    #[error("missing expected columns: {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Failures while turning a dataset into a chart or a document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("column `{0}` not found")]
    MissingColumn(String),

    #[error("row {row}, column `{column}`: {reason}")]
    InvalidCell {
        row: usize,
        column: String,
        reason: String,
    },

    #[error("pdf assembly failed: {0}")]
    Pdf(String),

    #[error("chart serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// A route segment that names no known chart or document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown kind `{0}`")]
pub struct UnknownKind(pub String);
