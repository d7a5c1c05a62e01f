//! Repository for the `profiles` table.

use sqlx::PgPool;

use regportal_core::types::DbId;

use crate::models::profile::Profile;

/// Column list for `profiles` queries.
const COLUMNS: &str = "id, user_id, mobile_number, phone_verified, created_at, updated_at";

/// Provides CRUD operations for candidate profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert an empty profile for a freshly registered user.
    pub async fn create(pool: &PgPool, user_id: DbId) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (user_id) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find the profile belonging to a user.
    pub async fn find_by_user(pool: &PgPool, user_id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Record the mobile number a verification code was sent to.
    pub async fn set_mobile(
        pool: &PgPool,
        user_id: DbId,
        mobile: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET mobile_number = $2, updated_at = now() \
             WHERE user_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(mobile)
            .fetch_optional(pool)
            .await
    }

    /// Mark the profile's phone number as verified.
    pub async fn mark_phone_verified(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET phone_verified = TRUE, updated_at = now() \
             WHERE user_id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
