//! Repository for the `payments` table.
//!
//! Rows are append-only; callers treat the latest row per application as
//! the authoritative payment status.

use sqlx::PgPool;

use regportal_core::types::DbId;

use crate::models::payment::{CreatePayment, Payment};

/// Column list for `payments` queries.
const COLUMNS: &str = "id, application_id, amount, payment_status, payment_method, \
     transaction_id, razorpay_order_id, razorpay_payment_id, razorpay_signature, \
     payment_date, created_at";

/// Provides append/read operations for payment rows.
pub struct PaymentRepo;

impl PaymentRepo {
    /// The most recently created payment row for an application.
    pub async fn latest_by_application(
        pool: &PgPool,
        application_id: DbId,
    ) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments \
             WHERE application_id = $1 \
             ORDER BY created_at DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(application_id)
            .fetch_optional(pool)
            .await
    }

    /// Append a payment row.
    pub async fn create(pool: &PgPool, payment: CreatePayment) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (application_id, amount, payment_status, payment_method, \
                 transaction_id, razorpay_order_id, razorpay_payment_id, \
                 razorpay_signature, payment_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(payment.application_id)
            .bind(payment.amount)
            .bind(&payment.payment_status)
            .bind(&payment.payment_method)
            .bind(&payment.transaction_id)
            .bind(&payment.razorpay_order_id)
            .bind(&payment.razorpay_payment_id)
            .bind(&payment.razorpay_signature)
            .bind(payment.payment_date)
            .fetch_one(pool)
            .await
    }

    /// All payment rows for an application, newest first.
    pub async fn list_by_application(
        pool: &PgPool,
        application_id: DbId,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments \
             WHERE application_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(application_id)
            .fetch_all(pool)
            .await
    }
}
