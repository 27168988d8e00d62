use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Convenience result type for processing and execution entry points.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Error type returned by ingestion functions.
///
/// This is a single error enum shared across CSV/JSON and glob-based ingestion.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV ingestion error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON document could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The glob pattern passed to [`crate::ingestion::ingest_from_glob`] is malformed.
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// The input does not have the shape of an account list (missing columns/fields, etc.).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// An account value is NaN or infinite and cannot be written out.
    #[error("account '{name}' has non-finite value {value}")]
    NonFiniteValue { name: String, value: f64 },

    /// A value could not be parsed into the field type of [`crate::types::Account`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

/// Error type for argument checks made at call entry.
///
/// Callback failures are never wrapped in this type; the `try_*` operations in
/// [`crate::processing`] hand the callback's own error back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    /// An argument broke the documented contract of the operation.
    #[error("contract violation: {message}")]
    ContractViolation { message: String },

    /// The execution engine's worker pool could not be started.
    #[error("thread pool error: {message}")]
    ThreadPool { message: String },
}

impl ProcessingError {
    pub(crate) fn contract(message: impl Into<String>) -> Self {
        Self::ContractViolation {
            message: message.into(),
        }
    }
}
