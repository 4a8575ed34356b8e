//! Error types for the table library

use thiserror::Error;

/// Table error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Line is not a pipe-delimited row
    #[error("Not a table row: {0}")]
    NotARow(String),

    /// Row has a different number of cells than expected
    #[error("Expected {expected} cells, found {found}")]
    ColumnCount { expected: usize, found: usize },
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;
