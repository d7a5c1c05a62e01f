//! Refresh token session model.

use sqlx::FromRow;

use regportal_core::types::{DbId, Timestamp};

/// A row from the `refresh_tokens` table. Only the SHA-256 hash of the
/// opaque token is stored, so a database leak does not compromise active
/// sessions.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshToken {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub revoked: bool,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}
