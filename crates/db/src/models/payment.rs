//! Payment record models.
//!
//! Payment rows are append-only; the most recently created row per
//! application is authoritative.

use serde::Serialize;
use sqlx::FromRow;

use regportal_core::types::{DbId, Timestamp};

/// A row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub application_id: DbId,
    pub amount: f64,
    pub payment_status: String,
    pub payment_method: String,
    pub transaction_id: Option<String>,
    /// Opaque checkout confirmation fields, persisted verbatim.
    pub razorpay_order_id: Option<String>,
    pub razorpay_payment_id: Option<String>,
    pub razorpay_signature: Option<String>,
    pub payment_date: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for appending a payment row.
#[derive(Debug, Clone)]
pub struct CreatePayment {
    pub application_id: DbId,
    pub amount: f64,
    pub payment_status: String,
    pub payment_method: String,
    pub transaction_id: Option<String>,
    pub razorpay_order_id: Option<String>,
    pub razorpay_payment_id: Option<String>,
    pub razorpay_signature: Option<String>,
    pub payment_date: Option<Timestamp>,
}
