//! Repository for the `documents` table (wizard step 5).

use sqlx::PgPool;

use regportal_core::types::DbId;

use crate::models::document::{CreateDocument, Document};

/// Column list for `documents` queries.
const COLUMNS: &str = "id, user_id, application_id, document_type, file_name, file_path, \
     file_url, file_size, mime_type, status, created_at";

/// Provides CRUD operations for uploaded documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// All documents for a candidate, newest first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Persist a completed upload.
    pub async fn create(pool: &PgPool, doc: CreateDocument) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (user_id, application_id, document_type, file_name, \
                 file_path, file_url, file_size, mime_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(doc.user_id)
            .bind(doc.application_id)
            .bind(&doc.document_type)
            .bind(&doc.file_name)
            .bind(&doc.file_path)
            .bind(&doc.file_url)
            .bind(doc.file_size)
            .bind(&doc.mime_type)
            .fetch_one(pool)
            .await
    }

    /// Find a document owned by the candidate.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a document owned by the candidate.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
