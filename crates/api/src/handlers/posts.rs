//! Handlers for the `/posts` resource.

use axum::extract::State;
use axum::Json;
use regportal_db::models::post::Post;
use regportal_db::repositories::PostRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/posts
///
/// List the examination posts currently open for application. Public: the
/// list is shown before the candidate picks a post on step 1.
pub async fn list_posts(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Post>>>> {
    let posts = PostRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: posts }))
}
