//! Educational qualification (wizard step 3) models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use regportal_core::types::{DbId, Timestamp};

/// A row from the `educational_qualifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EducationalQualification {
    pub id: DbId,
    pub user_id: DbId,
    pub application_id: DbId,
    pub qualification: String,
    pub board_university: String,
    pub year_of_passing: i32,
    pub marks_percentage: f64,
    pub subjects: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for adding or editing a qualification row.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertEducation {
    pub qualification: String,
    pub board_university: String,
    pub year_of_passing: i32,
    pub marks_percentage: f64,
    pub subjects: Option<String>,
}
