//! Repository for the `personal_info` table (wizard step 1).

use sqlx::PgPool;

use regportal_core::types::DbId;

use crate::models::personal_info::{PersonalInfo, UpsertPersonalInfo};

/// Column list for `personal_info` queries.
const COLUMNS: &str = "id, user_id, application_id, post_id, first_name, middle_name, \
     last_name, father_name, mother_name, date_of_birth, gender, category, \
     aadhar_number, address, state, district, pincode, alternative_mobile, \
     created_at, updated_at";

/// Provides upsert/read operations for step 1 data.
pub struct PersonalInfoRepo;

impl PersonalInfoRepo {
    /// Insert or update the candidate's personal info (keyed by user).
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        application_id: DbId,
        info: &UpsertPersonalInfo,
    ) -> Result<PersonalInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO personal_info (user_id, application_id, post_id, first_name, \
                 middle_name, last_name, father_name, mother_name, date_of_birth, gender, \
                 category, aadhar_number, address, state, district, pincode, \
                 alternative_mobile) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, \
                 $16, $17) \
             ON CONFLICT ON CONSTRAINT uq_personal_info_user_id \
             DO UPDATE SET application_id = EXCLUDED.application_id, \
                 post_id = EXCLUDED.post_id, first_name = EXCLUDED.first_name, \
                 middle_name = EXCLUDED.middle_name, last_name = EXCLUDED.last_name, \
                 father_name = EXCLUDED.father_name, mother_name = EXCLUDED.mother_name, \
                 date_of_birth = EXCLUDED.date_of_birth, gender = EXCLUDED.gender, \
                 category = EXCLUDED.category, aadhar_number = EXCLUDED.aadhar_number, \
                 address = EXCLUDED.address, state = EXCLUDED.state, \
                 district = EXCLUDED.district, pincode = EXCLUDED.pincode, \
                 alternative_mobile = EXCLUDED.alternative_mobile, updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PersonalInfo>(&query)
            .bind(user_id)
            .bind(application_id)
            .bind(info.post_id)
            .bind(&info.first_name)
            .bind(&info.middle_name)
            .bind(&info.last_name)
            .bind(&info.father_name)
            .bind(&info.mother_name)
            .bind(info.date_of_birth)
            .bind(&info.gender)
            .bind(&info.category)
            .bind(&info.aadhar_number)
            .bind(&info.address)
            .bind(&info.state)
            .bind(&info.district)
            .bind(&info.pincode)
            .bind(&info.alternative_mobile)
            .fetch_one(pool)
            .await
    }

    /// The candidate's personal info row, if saved.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<PersonalInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM personal_info WHERE user_id = $1");
        sqlx::query_as::<_, PersonalInfo>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
