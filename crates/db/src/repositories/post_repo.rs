//! Repository for the `posts` table.

use sqlx::PgPool;

use regportal_core::types::DbId;

use crate::models::post::Post;

/// Column list for `posts` queries.
const COLUMNS: &str = "id, post_name, post_code, is_active, created_at";

/// Provides read operations over examination posts.
pub struct PostRepo;

impl PostRepo {
    /// List active posts ordered by name (the public post picker).
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts WHERE is_active = TRUE ORDER BY post_name"
        );
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    /// Find a post by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
