//! Personal info (wizard step 1) models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use regportal_core::types::{DbId, Timestamp};

/// A row from the `personal_info` table. One per user, upserted on save.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PersonalInfo {
    pub id: DbId,
    pub user_id: DbId,
    pub application_id: DbId,
    pub post_id: Option<DbId>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub category: String,
    pub aadhar_number: String,
    pub address: String,
    pub state: String,
    pub district: String,
    pub pincode: String,
    pub alternative_mobile: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn default_state() -> String {
    "Jharkhand".to_string()
}

/// Request body for saving step 1.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertPersonalInfo {
    pub post_id: DbId,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub father_name: String,
    pub mother_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub category: String,
    pub aadhar_number: String,
    pub address: String,
    #[serde(default = "default_state")]
    pub state: String,
    pub district: String,
    pub pincode: String,
    pub alternative_mobile: Option<String>,
}
