//! Candidate profile model (phone verification state).

use serde::Serialize;
use sqlx::FromRow;

use regportal_core::types::{DbId, Timestamp};

/// A row from the `profiles` table. One per user, created at registration.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub mobile_number: Option<String>,
    pub phone_verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
