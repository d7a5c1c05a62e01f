//! Category fee schedule model.

use serde::Serialize;
use sqlx::FromRow;

use regportal_core::types::DbId;

/// A row from the `category_payments` table: application fee per category.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryPayment {
    pub id: DbId,
    pub category: String,
    pub amount: f64,
}
