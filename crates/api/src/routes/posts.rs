//! Route definitions for the `/posts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Routes mounted at `/posts`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(posts::list_posts))
}
