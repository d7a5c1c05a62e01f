//! Phone verification OTP models.

use serde::Serialize;
use sqlx::FromRow;

use regportal_core::types::{DbId, Timestamp};

/// A row from the `phone_otps` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PhoneOtp {
    pub id: DbId,
    pub user_id: DbId,
    pub mobile: String,
    /// The code itself never leaves the server.
    #[serde(skip_serializing)]
    pub code: String,
    pub purpose: String,
    pub used: bool,
    pub attempts: i32,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for inserting a freshly generated code.
#[derive(Debug, Clone)]
pub struct CreatePhoneOtp {
    pub user_id: DbId,
    pub mobile: String,
    pub code: String,
    pub purpose: String,
    pub expires_at: Timestamp,
}
