//! Unified error codes for gym-desk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Member errors
//! - 2xxx: Storage errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they can be logged
/// and serialized compactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Member ====================
    /// Member not found
    MemberNotFound = 1001,
    /// A member with this id already exists
    DuplicateMemberId = 1002,
    /// Operation not available for this member variant
    MemberKindMismatch = 1003,
    /// Membership is inactive
    MemberInactive = 1004,
    /// Roster has no members
    RosterEmpty = 1005,

    // ==================== 2xxx: Storage ====================
    /// Member file could not be read
    StorageReadFailed = 2001,
    /// Member file could not be written
    StorageWriteFailed = 2002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Member
            ErrorCode::MemberNotFound => "Member not found",
            ErrorCode::DuplicateMemberId => "A member with this ID already exists",
            ErrorCode::MemberKindMismatch => "Operation not available for this member type",
            ErrorCode::MemberInactive => "Membership is inactive",
            ErrorCode::RosterEmpty => "No members to save!",

            // Storage
            ErrorCode::StorageReadFailed => "Failed to read member file",
            ErrorCode::StorageWriteFailed => "Failed to write member file",

            // System
            ErrorCode::InternalError => "Internal error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Member
            1001 => Ok(ErrorCode::MemberNotFound),
            1002 => Ok(ErrorCode::DuplicateMemberId),
            1003 => Ok(ErrorCode::MemberKindMismatch),
            1004 => Ok(ErrorCode::MemberInactive),
            1005 => Ok(ErrorCode::RosterEmpty),

            // Storage
            2001 => Ok(ErrorCode::StorageReadFailed),
            2002 => Ok(ErrorCode::StorageWriteFailed),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip_through_u16() {
        for code in [
            ErrorCode::RequiredField,
            ErrorCode::RosterEmpty,
            ErrorCode::MemberNotFound,
            ErrorCode::DuplicateMemberId,
            ErrorCode::StorageWriteFailed,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::MemberNotFound.to_string(), "E1001");
        assert_eq!(ErrorCode::RequiredField.to_string(), "E0007");
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::DuplicateMemberId).unwrap();
        assert_eq!(json, "1002");
        let code: ErrorCode = serde_json::from_str("2002").unwrap();
        assert_eq!(code, ErrorCode::StorageWriteFailed);
        assert!(serde_json::from_str::<ErrorCode>("2003").is_err());
    }
}
