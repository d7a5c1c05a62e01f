//! Handlers for step 4 (work experience).
//!
//! Experience rows are optional in spirit but the step counts as complete
//! only once at least one row exists, mirroring the other collection steps.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use regportal_core::error::CoreError;
use regportal_core::types::DbId;
use regportal_core::validation;
use regportal_db::models::experience::{ExperienceInfo, UpsertExperience};
use regportal_db::repositories::ExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::registration::{
    ensure_application_editable, ensure_step_unlocked, require_application,
};
use crate::middleware::auth::VerifiedCandidate;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/registration/experience
pub async fn list_experience(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
) -> AppResult<Json<DataResponse<Vec<ExperienceInfo>>>> {
    let rows = ExperienceRepo::list_by_user(&state.pool, candidate.user_id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/v1/registration/experience
pub async fn create_experience(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
    Json(input): Json<UpsertExperience>,
) -> AppResult<(StatusCode, Json<DataResponse<ExperienceInfo>>)> {
    validate_experience(&input)?;
    ensure_step_unlocked(&state, candidate.user_id, 4).await?;

    let application = require_application(&state, candidate.user_id).await?;
    ensure_application_editable(&application)?;

    let row =
        ExperienceRepo::create(&state.pool, candidate.user_id, application.id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/v1/registration/experience/{id}
pub async fn update_experience(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertExperience>,
) -> AppResult<Json<DataResponse<ExperienceInfo>>> {
    validate_experience(&input)?;

    let application = require_application(&state, candidate.user_id).await?;
    ensure_application_editable(&application)?;

    let row = ExperienceRepo::update(&state.pool, id, candidate.user_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "experience record",
            id,
        })?;
    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/v1/registration/experience/{id}
pub async fn delete_experience(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let application = require_application(&state, candidate.user_id).await?;
    ensure_application_editable(&application)?;

    let deleted = ExperienceRepo::delete(&state.pool, id, candidate.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "experience record",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Field-level validation for an experience row.
fn validate_experience(input: &UpsertExperience) -> Result<(), CoreError> {
    validation::validate_required("organization", &input.organization)?;
    validation::validate_required("designation", &input.designation)?;

    if let Some(to_date) = input.to_date {
        if to_date < input.from_date {
            return Err(CoreError::Validation(
                "End date cannot be earlier than start date".into(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_row() -> UpsertExperience {
        UpsertExperience {
            organization: "District Office".into(),
            designation: "Clerk".into(),
            from_date: NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
            to_date: Some(NaiveDate::from_ymd_opt(2022, 6, 30).unwrap()),
            responsibilities: None,
        }
    }

    #[test]
    fn test_valid_row_passes() {
        assert!(validate_experience(&valid_row()).is_ok());
    }

    #[test]
    fn test_inverted_dates_rejected() {
        let mut row = valid_row();
        row.to_date = Some(NaiveDate::from_ymd_opt(2018, 1, 1).unwrap());
        assert!(validate_experience(&row).is_err());
    }

    #[test]
    fn test_open_ended_experience_allowed() {
        let mut row = valid_row();
        row.to_date = None;
        assert!(validate_experience(&row).is_ok());
    }
}
