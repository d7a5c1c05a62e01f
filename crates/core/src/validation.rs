//! Field-level validation for candidate-entered data.
//!
//! Mirrors the constraints enforced on the registration forms: identity
//! number, postal code, and mobile number formats. All checks run before
//! any database write.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static AADHAAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{12}$").expect("valid regex"));

static PINCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}$").expect("valid regex"));

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("valid regex"));

/// Validate a 12-digit Aadhaar number.
pub fn validate_aadhaar(value: &str) -> Result<(), CoreError> {
    if AADHAAR_RE.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Aadhaar number must be exactly 12 digits".to_string(),
        ))
    }
}

/// Validate a 6-digit postal pincode.
pub fn validate_pincode(value: &str) -> Result<(), CoreError> {
    if PINCODE_RE.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Pincode must be exactly 6 digits".to_string(),
        ))
    }
}

/// Validate a 10-digit mobile number.
pub fn validate_mobile(value: &str) -> Result<(), CoreError> {
    if MOBILE_RE.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Mobile number must be exactly 10 digits".to_string(),
        ))
    }
}

/// Validate a required free-text field (non-empty after trimming).
pub fn validate_required(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aadhaar_must_be_twelve_digits() {
        assert!(validate_aadhaar("123456789012").is_ok());
        assert!(validate_aadhaar("12345678901").is_err());
        assert!(validate_aadhaar("1234567890123").is_err());
        assert!(validate_aadhaar("12345678901a").is_err());
        assert!(validate_aadhaar("").is_err());
    }

    #[test]
    fn pincode_must_be_six_digits() {
        assert!(validate_pincode("834001").is_ok());
        assert!(validate_pincode("8340011").is_err());
        assert!(validate_pincode("83400").is_err());
        assert!(validate_pincode("83400x").is_err());
    }

    #[test]
    fn mobile_must_be_ten_digits() {
        assert!(validate_mobile("9876543210").is_ok());
        assert!(validate_mobile("987654321").is_err());
        assert!(validate_mobile("98765432100").is_err());
        assert!(validate_mobile("98765 4321").is_err());
    }

    #[test]
    fn required_fields_reject_blank() {
        assert!(validate_required("First name", "Asha").is_ok());
        assert!(validate_required("First name", "").is_err());
        assert!(validate_required("First name", "   ").is_err());
    }
}
