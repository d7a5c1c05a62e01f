//! Repository for the `phone_otps` table.

use sqlx::PgPool;

use regportal_core::types::DbId;

use crate::models::phone_otp::{CreatePhoneOtp, PhoneOtp};

/// Column list for `phone_otps` queries.
const COLUMNS: &str =
    "id, user_id, mobile, code, purpose, used, attempts, expires_at, created_at";

/// Provides operations for phone verification codes.
pub struct PhoneOtpRepo;

impl PhoneOtpRepo {
    /// Insert a freshly generated code.
    pub async fn create(pool: &PgPool, otp: CreatePhoneOtp) -> Result<PhoneOtp, sqlx::Error> {
        let query = format!(
            "INSERT INTO phone_otps (user_id, mobile, code, purpose, expires_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PhoneOtp>(&query)
            .bind(otp.user_id)
            .bind(&otp.mobile)
            .bind(&otp.code)
            .bind(&otp.purpose)
            .bind(otp.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Latest unused, unexpired code for this user and mobile number.
    pub async fn find_latest_active(
        pool: &PgPool,
        user_id: DbId,
        mobile: &str,
    ) -> Result<Option<PhoneOtp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM phone_otps \
             WHERE user_id = $1 AND mobile = $2 AND used = FALSE AND expires_at >= now() \
             ORDER BY created_at DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, PhoneOtp>(&query)
            .bind(user_id)
            .bind(mobile)
            .fetch_optional(pool)
            .await
    }

    /// Record a failed verification attempt, returning the new count.
    pub async fn increment_attempts(pool: &PgPool, id: DbId) -> Result<i32, sqlx::Error> {
        let row: (i32,) = sqlx::query_as(
            "UPDATE phone_otps SET attempts = attempts + 1 WHERE id = $1 RETURNING attempts",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Mark a code as consumed so it cannot be replayed.
    pub async fn mark_used(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE phone_otps SET used = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
