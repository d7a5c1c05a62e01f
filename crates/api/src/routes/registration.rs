//! Route definitions for the `/registration` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{
    documents, education, experience, other_details, payments, personal_info, registration,
};
use crate::state::AppState;

/// Routes mounted at `/registration`. All require a verified candidate.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/state", get(registration::get_state))
        .route("/goto", post(registration::go_to_step))
        .route("/submit", post(registration::submit))
        .route(
            "/personal-info",
            get(personal_info::get_personal_info).put(personal_info::upsert_personal_info),
        )
        .route(
            "/other-details",
            get(other_details::get_other_details).put(other_details::upsert_other_details),
        )
        .route(
            "/education",
            get(education::list_education).post(education::create_education),
        )
        .route(
            "/education/{id}",
            put(education::update_education).delete(education::delete_education),
        )
        .route(
            "/experience",
            get(experience::list_experience).post(experience::create_experience),
        )
        .route(
            "/experience/{id}",
            put(experience::update_experience).delete(experience::delete_experience),
        )
        .route(
            "/documents",
            get(documents::list_documents).post(documents::upload_document),
        )
        .route("/documents/{id}", delete(documents::delete_document))
        .route("/payment", get(payments::get_payment_state))
        .route("/payment/checkout", post(payments::checkout))
        .route("/payment/failure", post(payments::payment_failure))
}
