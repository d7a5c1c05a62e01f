pub mod auth;
pub mod dashboard;
pub mod health;
pub mod posts;
pub mod profile;
pub mod registration;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                      create account (public)
/// /auth/login                         login (public)
/// /auth/refresh                       refresh (public)
/// /auth/logout                        logout (requires auth)
///
/// /profile/phone/request-otp          issue verification code
/// /profile/phone/verify-otp           verify code, mark phone verified
///
/// /posts                              list open examination posts (public)
///
/// /registration/state                 wizard position + completion (GET)
/// /registration/goto                  validate navigation (POST)
/// /registration/submit                finalize application (POST)
/// /registration/personal-info         step 1 (GET, PUT)
/// /registration/other-details         step 2 (GET, PUT)
/// /registration/education             step 3 (GET, POST)
/// /registration/education/{id}        step 3 row (PUT, DELETE)
/// /registration/experience            step 4 (GET, POST)
/// /registration/experience/{id}       step 4 row (PUT, DELETE)
/// /registration/documents             step 5 (GET, POST multipart)
/// /registration/documents/{id}        step 5 row (DELETE)
/// /registration/payment               step 6 state, settles exemptions (GET)
/// /registration/payment/checkout      gateway success callback (POST)
/// /registration/payment/failure       gateway failure callback (POST)
///
/// /dashboard/summary                  aggregated candidate view (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Phone verification.
        .nest("/profile", profile::router())
        // Examination posts.
        .nest("/posts", posts::router())
        // Registration wizard: state, navigation, steps, payment, submit.
        .nest("/registration", registration::router())
        // Candidate dashboard.
        .nest("/dashboard", dashboard::router())
}
