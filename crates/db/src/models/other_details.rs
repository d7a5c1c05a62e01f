//! Other details (wizard step 2) models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use regportal_core::types::{DbId, Timestamp};

/// A row from the `other_details` table. One per user, upserted on save.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OtherDetails {
    pub id: DbId,
    pub user_id: DbId,
    pub application_id: DbId,
    pub nationality: String,
    pub religion: Option<String>,
    pub marital_status: Option<String>,
    pub is_ex_serviceman: bool,
    pub is_disabled: bool,
    pub identification_mark: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn default_nationality() -> String {
    "Indian".to_string()
}

/// Request body for saving step 2. Every field is optional on the form.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertOtherDetails {
    #[serde(default = "default_nationality")]
    pub nationality: String,
    pub religion: Option<String>,
    pub marital_status: Option<String>,
    #[serde(default)]
    pub is_ex_serviceman: bool,
    #[serde(default)]
    pub is_disabled: bool,
    pub identification_mark: Option<String>,
}
