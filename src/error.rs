//! Error types for studentdb
//!
//! Provides a unified error type for all operations. Every variant is
//! recoverable: callers report it and keep serving further operations.

use thiserror::Error;

/// Result type alias using DbError
pub type Result<T> = std::result::Result<T, DbError>;

/// Unified error type for studentdb operations
#[derive(Debug, Error)]
pub enum DbError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Student ID {0} already exists")]
    DuplicateId(i32),

    #[error("Student ID {0} not found")]
    NotFound(i32),

    #[error("Store is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("Snapshot holds {offered} records but capacity is {capacity}")]
    CapacityExceeded { capacity: usize, offered: usize },

    // -------------------------------------------------------------------------
    // Index Errors
    // -------------------------------------------------------------------------
    #[error("Index has no free slot for ID {0}")]
    IndexExhausted(i32),

    // -------------------------------------------------------------------------
    // Snapshot / Audit Parsing Errors
    // -------------------------------------------------------------------------
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DbError {
    /// Audit status string for a failed operation
    pub fn audit_status(&self) -> String {
        match self {
            DbError::DuplicateId(_) => "FAIL(DUPLICATE)".to_string(),
            DbError::Full { .. } | DbError::CapacityExceeded { .. } => "FAIL(FULL)".to_string(),
            DbError::NotFound(_) => "NOT_FOUND".to_string(),
            DbError::IndexExhausted(_) => "FAIL(INDEX)".to_string(),
            _ => "FAIL".to_string(),
        }
    }
}
