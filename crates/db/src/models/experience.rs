//! Work experience (wizard step 4) models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use regportal_core::types::{DbId, Timestamp};

/// A row from the `experience_info` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExperienceInfo {
    pub id: DbId,
    pub user_id: DbId,
    pub application_id: DbId,
    pub organization: String,
    pub designation: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub responsibilities: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for adding or editing an experience row.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertExperience {
    pub organization: String,
    pub designation: String,
    pub from_date: NaiveDate,
    pub to_date: Option<NaiveDate>,
    pub responsibilities: Option<String>,
}
