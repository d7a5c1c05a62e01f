//! Phone verification OTP rules.
//!
//! Codes are six digits, single-use, expire after ten minutes, and allow
//! three verification attempts before a fresh code must be requested.

use rand::Rng;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Number of digits in an OTP code.
pub const OTP_LENGTH: usize = 6;

/// Minutes before a code expires.
pub const OTP_EXPIRY_MINS: i64 = 10;

/// Maximum failed verification attempts per code.
pub const MAX_ATTEMPTS: u32 = 3;

/// Purpose tag stored on registration-flow codes.
pub const PURPOSE_REGISTRATION: &str = "registration";

/// Generate a random six-digit code, zero-padded.
pub fn generate_code() -> String {
    let n: u32 = rand::rng().random_range(0..1_000_000);
    format!("{n:06}")
}

/// Expiry timestamp for a code issued at `now`.
pub fn expires_at(now: Timestamp) -> Timestamp {
    now + chrono::Duration::minutes(OTP_EXPIRY_MINS)
}

/// Whether a code has expired as of `now`.
pub fn is_expired(expires_at: Timestamp, now: Timestamp) -> bool {
    now >= expires_at
}

/// Validate the shape of a submitted code before touching the database.
pub fn validate_code_format(code: &str) -> Result<(), CoreError> {
    if code.len() == OTP_LENGTH && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Verification code must be exactly {OTP_LENGTH} digits"
        )))
    }
}

/// Whether another verification attempt is allowed for this code.
pub fn attempts_remaining(attempts: u32) -> bool {
    attempts < MAX_ATTEMPTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn generated_codes_are_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), OTP_LENGTH);
            assert!(code.bytes().all(|b| b.is_ascii_digit()), "got {code}");
        }
    }

    #[test]
    fn expiry_is_ten_minutes_out() {
        let now = chrono::Utc.with_ymd_and_hms(2026, 8, 27, 10, 0, 0).unwrap();
        let exp = expires_at(now);
        assert_eq!(exp - now, chrono::Duration::minutes(10));
        assert!(!is_expired(exp, now));
        assert!(is_expired(exp, exp));
        assert!(is_expired(exp, exp + chrono::Duration::seconds(1)));
    }

    #[test]
    fn code_format_validation() {
        assert!(validate_code_format("012345").is_ok());
        assert!(validate_code_format("12345").is_err());
        assert!(validate_code_format("1234567").is_err());
        assert!(validate_code_format("12a456").is_err());
        assert!(validate_code_format("").is_err());
    }

    #[test]
    fn three_attempts_allowed() {
        assert!(attempts_remaining(0));
        assert!(attempts_remaining(2));
        assert!(!attempts_remaining(3));
        assert!(!attempts_remaining(10));
    }
}
