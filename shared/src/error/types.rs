//! Error type and result alias

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type for gym-desk, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Category of the underlying code
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    // ==================== Convenience constructors ====================

    /// Create a required field error
    pub fn required_field(field: &str) -> Self {
        Self::with_message(ErrorCode::RequiredField, format!("{field} is required"))
            .with_detail("field", field)
    }

    /// Create a value out of range error
    pub fn out_of_range(field: &str, msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValueOutOfRange, msg).with_detail("field", field)
    }

    /// No member with this id
    pub fn member_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::MemberNotFound, format!("No member found with ID: {id}"))
            .with_detail("id", id)
    }

    /// Id already taken by another member
    pub fn duplicate_member_id(id: i64) -> Self {
        Self::with_message(
            ErrorCode::DuplicateMemberId,
            format!("A member with ID {id} already exists"),
        )
        .with_detail("id", id)
    }

    /// Operation is reserved for the other member variant
    pub fn kind_mismatch(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::MemberKindMismatch, msg)
    }

    /// Membership must be active for this operation
    pub fn member_inactive(id: i64) -> Self {
        Self::with_message(
            ErrorCode::MemberInactive,
            format!("Membership of member {id} is currently inactive"),
        )
        .with_detail("id", id)
    }

    /// Member file could not be read
    pub fn storage_read(path: &Path, err: &std::io::Error) -> Self {
        Self::with_message(
            ErrorCode::StorageReadFailed,
            format!("Error reading {}: {err}", path.display()),
        )
        .with_detail("path", path.display().to_string())
    }

    /// Member file could not be written
    pub fn storage_write(path: &Path, err: &std::io::Error) -> Self {
        Self::with_message(
            ErrorCode::StorageWriteFailed,
            format!("Error writing {}: {err}", path.display()),
        )
        .with_detail("path", path.display().to_string())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
