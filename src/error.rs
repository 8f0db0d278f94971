//! Error types for the export core

use thiserror::Error;

/// Errors surfaced by the exporter itself.
///
/// Data-shape irregularities inside records (missing fields, non-object
/// records, nested values) are absorbed into degenerate-but-valid output
/// and never appear here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExportError {
    /// Zero input records: there is nothing to export. Callers typically
    /// treat this as "skip the upload" rather than a fatal failure.
    #[error("no documents to export")]
    EmptyInput,

    /// The schema sample limit must be at least 1.
    #[error("invalid sample limit: {0} (must be positive)")]
    InvalidSampleLimit(usize),
}
