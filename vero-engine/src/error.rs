//! Engine error types.
//!
//! Every failure mode has a named variant. Only the true external
//! boundaries can fail — CSV ingestion and file I/O. Classification,
//! querying, aggregation and summarizing are total functions and have no
//! error path.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("CSV parse error at line {line}: {message}")]
    Csv { line: usize, message: String },

    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
