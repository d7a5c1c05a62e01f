//! Application lifecycle models.

use serde::Serialize;
use sqlx::FromRow;

use regportal_core::types::{DbId, Timestamp};

/// A row from the `applications` table: one candidate's attempt at
/// registering for a post. Created lazily on first personal-info save.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub user_id: DbId,
    pub post_id: Option<DbId>,
    pub status: String,
    /// Assigned only at submission (`REG<year><7 digits>`).
    pub application_number: Option<String>,
    pub submitted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An application joined with its post, as shown on the dashboard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationWithPost {
    pub id: DbId,
    pub user_id: DbId,
    pub post_id: Option<DbId>,
    pub status: String,
    pub application_number: Option<String>,
    pub submitted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub post_name: Option<String>,
    pub post_code: Option<String>,
}
