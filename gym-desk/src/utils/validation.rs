//! Input validation helpers
//!
//! Presence and number checks run before a member is added to the roster.
//! Text length is not limited.

use shared::error::AppError;

/// Validate that a required string is not blank.
pub fn validate_required_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    Ok(())
}

/// Validate that an amount is a finite number greater than zero.
pub fn validate_positive_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::out_of_range(
            field,
            format!("{field} must be a positive number, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Alice", "Name").is_ok());
        assert!(validate_required_text(&"x".repeat(5000), "Name").is_ok());

        let err = validate_required_text("   ", "Name").unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "Name is required");
    }

    #[test]
    fn test_positive_amount() {
        assert!(validate_positive_amount(50000.0, "Premium charge").is_ok());
        assert!(validate_positive_amount(0.0, "Premium charge").is_err());
        assert!(validate_positive_amount(-1.0, "Premium charge").is_err());
        assert!(validate_positive_amount(f64::NAN, "Premium charge").is_err());
        assert!(validate_positive_amount(f64::INFINITY, "Premium charge").is_err());
    }
}
