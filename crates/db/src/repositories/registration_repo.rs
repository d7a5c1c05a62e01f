//! Derivation of wizard step completion from child-row presence.
//!
//! This is the data-loading side of the wizard: one pass over the per-step
//! tables produces a [`StepRecords`], which the core layer turns into the
//! completed-step set. Completion is never stored on the application row.

use sqlx::PgPool;

use regportal_core::types::DbId;
use regportal_core::wizard::StepRecords;

/// Loads the registration state for one candidate.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Load the per-step record presence for a candidate's application.
    ///
    /// `application_id` is the candidate's application, if one exists yet;
    /// without one there can be no payment rows.
    pub async fn load_step_records(
        pool: &PgPool,
        user_id: DbId,
        application_id: Option<DbId>,
    ) -> Result<StepRecords, sqlx::Error> {
        let (has_personal_info,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM personal_info WHERE user_id = $1)")
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        let (has_other_details,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM other_details WHERE user_id = $1)")
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        let (education_rows,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM educational_qualifications WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        let (experience_rows,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM experience_info WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        let (document_rows,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM documents WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        // Latest payment row wins; a missing row means pending.
        let payment_completed = match application_id {
            Some(app_id) => {
                let status: Option<(String,)> = sqlx::query_as(
                    "SELECT payment_status FROM payments \
                     WHERE application_id = $1 \
                     ORDER BY created_at DESC \
                     LIMIT 1",
                )
                .bind(app_id)
                .fetch_optional(pool)
                .await?;
                matches!(status, Some((s,)) if s == "completed")
            }
            None => false,
        };

        Ok(StepRecords {
            has_personal_info,
            has_other_details,
            education_rows: education_rows as u32,
            experience_rows: experience_rows as u32,
            document_rows: document_rows as u32,
            payment_completed,
        })
    }
}
