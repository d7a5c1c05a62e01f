//! Repository for the `experience_info` table (wizard step 4).

use sqlx::PgPool;

use regportal_core::types::DbId;

use crate::models::experience::{ExperienceInfo, UpsertExperience};

/// Column list for `experience_info` queries.
const COLUMNS: &str = "id, user_id, application_id, organization, designation, from_date, \
     to_date, responsibilities, created_at, updated_at";

/// Provides CRUD operations for experience rows.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// All experience rows for a candidate, oldest engagement first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ExperienceInfo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM experience_info \
             WHERE user_id = $1 \
             ORDER BY from_date, created_at"
        );
        sqlx::query_as::<_, ExperienceInfo>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert an experience row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        application_id: DbId,
        row: &UpsertExperience,
    ) -> Result<ExperienceInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO experience_info (user_id, application_id, organization, \
                 designation, from_date, to_date, responsibilities) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExperienceInfo>(&query)
            .bind(user_id)
            .bind(application_id)
            .bind(&row.organization)
            .bind(&row.designation)
            .bind(row.from_date)
            .bind(row.to_date)
            .bind(&row.responsibilities)
            .fetch_one(pool)
            .await
    }

    /// Update an experience row owned by the candidate.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        row: &UpsertExperience,
    ) -> Result<Option<ExperienceInfo>, sqlx::Error> {
        let query = format!(
            "UPDATE experience_info \
             SET organization = $3, designation = $4, from_date = $5, to_date = $6, \
                 responsibilities = $7, updated_at = now() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExperienceInfo>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&row.organization)
            .bind(&row.designation)
            .bind(row.from_date)
            .bind(row.to_date)
            .bind(&row.responsibilities)
            .fetch_optional(pool)
            .await
    }

    /// Delete an experience row owned by the candidate.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experience_info WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
