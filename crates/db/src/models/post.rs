//! Examination post model.

use serde::Serialize;
use sqlx::FromRow;

use regportal_core::types::{DbId, Timestamp};

/// A row from the `posts` table: one examination/position candidates apply for.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub post_name: String,
    pub post_code: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}
