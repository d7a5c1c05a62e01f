//! Repository for the `category_payments` fee schedule.

use sqlx::PgPool;

use crate::models::category_payment::CategoryPayment;

/// Column list for `category_payments` queries.
const COLUMNS: &str = "id, category, amount";

/// Provides fee lookups per reservation category.
pub struct CategoryPaymentRepo;

impl CategoryPaymentRepo {
    /// The fee row for a category, if configured.
    pub async fn find_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Option<CategoryPayment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category_payments WHERE category = $1");
        sqlx::query_as::<_, CategoryPayment>(&query)
            .bind(category)
            .fetch_optional(pool)
            .await
    }

    /// The full fee schedule.
    pub async fn list(pool: &PgPool) -> Result<Vec<CategoryPayment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM category_payments ORDER BY category");
        sqlx::query_as::<_, CategoryPayment>(&query).fetch_all(pool).await
    }
}
