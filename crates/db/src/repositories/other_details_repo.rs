//! Repository for the `other_details` table (wizard step 2).

use sqlx::PgPool;

use regportal_core::types::DbId;

use crate::models::other_details::{OtherDetails, UpsertOtherDetails};

/// Column list for `other_details` queries.
const COLUMNS: &str = "id, user_id, application_id, nationality, religion, marital_status, \
     is_ex_serviceman, is_disabled, identification_mark, created_at, updated_at";

/// Provides upsert/read operations for step 2 data.
pub struct OtherDetailsRepo;

impl OtherDetailsRepo {
    /// Insert or update the candidate's other details (keyed by user).
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        application_id: DbId,
        details: &UpsertOtherDetails,
    ) -> Result<OtherDetails, sqlx::Error> {
        let query = format!(
            "INSERT INTO other_details (user_id, application_id, nationality, religion, \
                 marital_status, is_ex_serviceman, is_disabled, identification_mark) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT ON CONSTRAINT uq_other_details_user_id \
             DO UPDATE SET application_id = EXCLUDED.application_id, \
                 nationality = EXCLUDED.nationality, religion = EXCLUDED.religion, \
                 marital_status = EXCLUDED.marital_status, \
                 is_ex_serviceman = EXCLUDED.is_ex_serviceman, \
                 is_disabled = EXCLUDED.is_disabled, \
                 identification_mark = EXCLUDED.identification_mark, updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OtherDetails>(&query)
            .bind(user_id)
            .bind(application_id)
            .bind(&details.nationality)
            .bind(&details.religion)
            .bind(&details.marital_status)
            .bind(details.is_ex_serviceman)
            .bind(details.is_disabled)
            .bind(&details.identification_mark)
            .fetch_one(pool)
            .await
    }

    /// The candidate's other-details row, if saved.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<OtherDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM other_details WHERE user_id = $1");
        sqlx::query_as::<_, OtherDetails>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
