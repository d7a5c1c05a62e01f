//! Repository for the `applications` table.

use sqlx::PgPool;

use regportal_core::types::{DbId, Timestamp};

use crate::models::application::{Application, ApplicationWithPost};

/// Column list for `applications` queries.
const COLUMNS: &str =
    "id, user_id, post_id, status, application_number, submitted_at, created_at, updated_at";

/// Provides CRUD operations for applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// The candidate's application, if one exists (at most one per user).
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE user_id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an application by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create the candidate's draft application, or return the existing one.
    ///
    /// Called lazily on the first personal-info save; the unique constraint
    /// on `user_id` makes concurrent first saves converge on one row.
    pub async fn ensure_draft(
        pool: &PgPool,
        user_id: DbId,
        post_id: DbId,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (user_id, post_id) \
             VALUES ($1, $2) \
             ON CONFLICT ON CONSTRAINT uq_applications_user_id \
             DO UPDATE SET post_id = EXCLUDED.post_id, updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(user_id)
            .bind(post_id)
            .fetch_one(pool)
            .await
    }

    /// Update the lifecycle status.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET status = $2, updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Finalize the application: one-way transition to `submitted` with the
    /// assigned application number and submission timestamp.
    ///
    /// The `status <> 'submitted'` guard makes a repeat call a no-op (the
    /// returned row count is zero), so submission is idempotent by key.
    pub async fn submit(
        pool: &PgPool,
        id: DbId,
        application_number: &str,
        submitted_at: Timestamp,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications \
             SET status = 'submitted', application_number = $2, submitted_at = $3, \
                 updated_at = now() \
             WHERE id = $1 AND status <> 'submitted' \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(application_number)
            .bind(submitted_at)
            .fetch_optional(pool)
            .await
    }

    /// Applications joined with their post, as shown on the dashboard.
    pub async fn list_with_post_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ApplicationWithPost>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationWithPost>(
            "SELECT a.id, a.user_id, a.post_id, a.status, a.application_number, \
                    a.submitted_at, a.created_at, p.post_name, p.post_code \
             FROM applications a \
             LEFT JOIN posts p ON p.id = a.post_id \
             WHERE a.user_id = $1 \
             ORDER BY a.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
