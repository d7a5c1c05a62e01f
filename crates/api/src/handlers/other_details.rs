//! Handlers for step 2 (other details).

use axum::extract::State;
use axum::Json;
use regportal_db::models::other_details::{OtherDetails, UpsertOtherDetails};
use regportal_db::repositories::OtherDetailsRepo;

use crate::error::AppResult;
use crate::handlers::registration::{
    ensure_application_editable, ensure_step_unlocked, require_application,
};
use crate::middleware::auth::VerifiedCandidate;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/registration/other-details
pub async fn get_other_details(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
) -> AppResult<Json<DataResponse<Option<OtherDetails>>>> {
    let details = OtherDetailsRepo::find_by_user(&state.pool, candidate.user_id).await?;
    Ok(Json(DataResponse { data: details }))
}

/// PUT /api/v1/registration/other-details
///
/// Upsert step 2. Requires step 1 to be saved first.
pub async fn upsert_other_details(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
    Json(input): Json<UpsertOtherDetails>,
) -> AppResult<Json<DataResponse<OtherDetails>>> {
    ensure_step_unlocked(&state, candidate.user_id, 2).await?;

    let application = require_application(&state, candidate.user_id).await?;
    ensure_application_editable(&application)?;

    let details =
        OtherDetailsRepo::upsert(&state.pool, candidate.user_id, application.id, &input).await?;

    Ok(Json(DataResponse { data: details }))
}
