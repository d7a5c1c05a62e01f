//! Payment status resolution and checkout signature verification.
//!
//! Payment rows are append-only: each successful checkout callback inserts
//! a new row and the most recently created row is authoritative. The
//! checkout provider signs `order_id|payment_id` with the merchant key
//! secret (HMAC-SHA256, hex-encoded); the signature must verify before a
//! completed payment is recorded.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::CoreError;

type HmacSha256 = Hmac<Sha256>;

// ---------------------------------------------------------------------------
// Status / method
// ---------------------------------------------------------------------------

/// Status of a single payment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
    Exempted,
}

impl PaymentStatus {
    /// Parse a status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            "exempted" => Ok(Self::Exempted),
            _ => Err(CoreError::Validation(format!(
                "Invalid payment status '{s}'. Must be one of: pending, \
                 completed, failed, refunded, exempted"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
            Self::Exempted => "exempted",
        }
    }

    /// Whether this status unlocks the Review step.
    pub fn unlocks_review(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Razorpay,
    Exempted,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Razorpay => "razorpay",
            Self::Exempted => "exempted",
        }
    }
}

// ---------------------------------------------------------------------------
// Latest-wins resolution
// ---------------------------------------------------------------------------

/// Resolve the authoritative payment status from the latest row's status
/// string, treating a missing row as pending.
///
/// "Latest by creation time" is the repository's job; this helper only
/// interprets the row it hands over.
pub fn resolve_status(latest: Option<&str>) -> Result<PaymentStatus, CoreError> {
    match latest {
        Some(s) => PaymentStatus::from_str_db(s),
        None => Ok(PaymentStatus::Pending),
    }
}

// ---------------------------------------------------------------------------
// Checkout signature
// ---------------------------------------------------------------------------

/// Compute the checkout signature for an order/payment pair.
pub fn compute_checkout_signature(order_id: &str, payment_id: &str, key_secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(key_secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify the signature the checkout widget handed back.
///
/// The order id, payment id, and signature are persisted verbatim on the
/// payment row; this check runs before the insert so an unverifiable
/// callback commits nothing.
pub fn verify_checkout_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    key_secret: &str,
) -> Result<(), CoreError> {
    // Constant-time comparison via the MAC itself.
    let mut mac = HmacSha256::new_from_slice(key_secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    let provided = hex::decode(signature)
        .map_err(|_| CoreError::Validation("Payment signature is not valid hex".to_string()))?;
    mac.verify_slice(&provided)
        .map_err(|_| CoreError::Validation("Payment signature verification failed".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrip() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Failed,
            PaymentStatus::Refunded,
            PaymentStatus::Exempted,
        ] {
            assert_eq!(PaymentStatus::from_str_db(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn status_rejects_unknown() {
        assert!(PaymentStatus::from_str_db("done").is_err());
        assert!(PaymentStatus::from_str_db("").is_err());
    }

    #[test]
    fn only_completed_unlocks_review() {
        assert!(PaymentStatus::Completed.unlocks_review());
        assert!(!PaymentStatus::Pending.unlocks_review());
        assert!(!PaymentStatus::Failed.unlocks_review());
        assert!(!PaymentStatus::Refunded.unlocks_review());
        assert!(!PaymentStatus::Exempted.unlocks_review());
    }

    #[test]
    fn missing_row_resolves_to_pending() {
        assert_eq!(resolve_status(None).unwrap(), PaymentStatus::Pending);
        assert_eq!(
            resolve_status(Some("completed")).unwrap(),
            PaymentStatus::Completed
        );
    }

    #[test]
    fn signature_roundtrip_verifies() {
        let sig = compute_checkout_signature("order_abc", "pay_123", "secret");
        assert!(verify_checkout_signature("order_abc", "pay_123", &sig, "secret").is_ok());
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let sig = compute_checkout_signature("order_abc", "pay_123", "secret");
        assert!(verify_checkout_signature("order_abc", "pay_999", &sig, "secret").is_err());
        assert!(verify_checkout_signature("order_abc", "pay_123", &sig, "other").is_err());
        assert!(verify_checkout_signature("order_abc", "pay_123", "deadbeef", "secret").is_err());
        assert!(
            verify_checkout_signature("order_abc", "pay_123", "not-hex", "secret").is_err(),
            "non-hex signatures must fail cleanly"
        );
    }
}
