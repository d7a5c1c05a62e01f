//! Repository for the `educational_qualifications` table (wizard step 3).

use sqlx::PgPool;

use regportal_core::types::DbId;

use crate::models::education::{EducationalQualification, UpsertEducation};

/// Column list for `educational_qualifications` queries.
const COLUMNS: &str = "id, user_id, application_id, qualification, board_university, \
     year_of_passing, marks_percentage, subjects, created_at, updated_at";

/// Provides CRUD operations for qualification rows.
pub struct EducationRepo;

impl EducationRepo {
    /// All qualification rows for a candidate, oldest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<EducationalQualification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM educational_qualifications \
             WHERE user_id = $1 \
             ORDER BY year_of_passing, created_at"
        );
        sqlx::query_as::<_, EducationalQualification>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a qualification row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        application_id: DbId,
        row: &UpsertEducation,
    ) -> Result<EducationalQualification, sqlx::Error> {
        let query = format!(
            "INSERT INTO educational_qualifications (user_id, application_id, \
                 qualification, board_university, year_of_passing, marks_percentage, \
                 subjects) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EducationalQualification>(&query)
            .bind(user_id)
            .bind(application_id)
            .bind(&row.qualification)
            .bind(&row.board_university)
            .bind(row.year_of_passing)
            .bind(row.marks_percentage)
            .bind(&row.subjects)
            .fetch_one(pool)
            .await
    }

    /// Update a qualification row owned by the candidate.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        row: &UpsertEducation,
    ) -> Result<Option<EducationalQualification>, sqlx::Error> {
        let query = format!(
            "UPDATE educational_qualifications \
             SET qualification = $3, board_university = $4, year_of_passing = $5, \
                 marks_percentage = $6, subjects = $7, updated_at = now() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EducationalQualification>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&row.qualification)
            .bind(&row.board_university)
            .bind(row.year_of_passing)
            .bind(row.marks_percentage)
            .bind(&row.subjects)
            .fetch_optional(pool)
            .await
    }

    /// Delete a qualification row owned by the candidate.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM educational_qualifications WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
