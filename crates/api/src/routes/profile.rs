//! Route definitions for the `/profile` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::phone;
use crate::state::AppState;

/// Routes mounted at `/profile`.
///
/// ```text
/// POST /phone/request-otp -> issue a verification code
/// POST /phone/verify-otp  -> verify the code
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/phone/request-otp", post(phone::request_otp))
        .route("/phone/verify-otp", post(phone::verify_otp))
}
