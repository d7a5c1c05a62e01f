//! Uploaded document (wizard step 5) models.

use serde::Serialize;
use sqlx::FromRow;

use regportal_core::types::{DbId, Timestamp};

/// A row from the `documents` table. `file_url` is the publicly
/// dereferenceable URL handed back by object storage.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub user_id: DbId,
    pub application_id: DbId,
    pub document_type: String,
    pub file_name: String,
    pub file_path: String,
    pub file_url: String,
    pub file_size: i64,
    pub mime_type: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for persisting a completed upload.
#[derive(Debug, Clone)]
pub struct CreateDocument {
    pub user_id: DbId,
    pub application_id: DbId,
    pub document_type: String,
    pub file_name: String,
    pub file_path: String,
    pub file_url: String,
    pub file_size: i64,
    pub mime_type: String,
}
