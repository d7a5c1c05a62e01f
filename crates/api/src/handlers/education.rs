//! Handlers for step 3 (educational qualifications).
//!
//! Unlike steps 1 and 2 this is a row collection: a candidate lists one row
//! per qualification, and the step counts as complete while at least one row
//! exists.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use regportal_core::error::CoreError;
use regportal_core::types::DbId;
use regportal_core::validation;
use regportal_db::models::education::{EducationalQualification, UpsertEducation};
use regportal_db::repositories::EducationRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::registration::{
    ensure_application_editable, ensure_step_unlocked, require_application,
};
use crate::middleware::auth::VerifiedCandidate;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/registration/education
pub async fn list_education(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
) -> AppResult<Json<DataResponse<Vec<EducationalQualification>>>> {
    let rows = EducationRepo::list_by_user(&state.pool, candidate.user_id).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/v1/registration/education
pub async fn create_education(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
    Json(input): Json<UpsertEducation>,
) -> AppResult<(StatusCode, Json<DataResponse<EducationalQualification>>)> {
    validate_education(&input)?;
    ensure_step_unlocked(&state, candidate.user_id, 3).await?;

    let application = require_application(&state, candidate.user_id).await?;
    ensure_application_editable(&application)?;

    let row = EducationRepo::create(&state.pool, candidate.user_id, application.id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// PUT /api/v1/registration/education/{id}
pub async fn update_education(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
    Path(id): Path<DbId>,
    Json(input): Json<UpsertEducation>,
) -> AppResult<Json<DataResponse<EducationalQualification>>> {
    validate_education(&input)?;

    let application = require_application(&state, candidate.user_id).await?;
    ensure_application_editable(&application)?;

    let row = EducationRepo::update(&state.pool, id, candidate.user_id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "educational qualification",
            id,
        })?;
    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/v1/registration/education/{id}
pub async fn delete_education(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let application = require_application(&state, candidate.user_id).await?;
    ensure_application_editable(&application)?;

    let deleted = EducationRepo::delete(&state.pool, id, candidate.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "educational qualification",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Field-level validation for an education row.
fn validate_education(input: &UpsertEducation) -> Result<(), CoreError> {
    validation::validate_required("qualification", &input.qualification)?;
    validation::validate_required("board_university", &input.board_university)?;

    if !(1950..=2100).contains(&input.year_of_passing) {
        return Err(CoreError::Validation(format!(
            "Invalid year of passing: {}",
            input.year_of_passing
        )));
    }
    if !(0.0..=100.0).contains(&input.marks_percentage) {
        return Err(CoreError::Validation(format!(
            "Marks percentage must be between 0 and 100, got {}",
            input.marks_percentage
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_row() -> UpsertEducation {
        UpsertEducation {
            qualification: "Matriculation".into(),
            board_university: "JAC".into(),
            year_of_passing: 2015,
            marks_percentage: 78.5,
            subjects: Some("Science".into()),
        }
    }

    #[test]
    fn test_valid_row_passes() {
        assert!(validate_education(&valid_row()).is_ok());
    }

    #[test]
    fn test_out_of_range_marks_rejected() {
        let mut row = valid_row();
        row.marks_percentage = 120.0;
        assert!(validate_education(&row).is_err());
    }

    #[test]
    fn test_implausible_year_rejected() {
        let mut row = valid_row();
        row.year_of_passing = 1800;
        assert!(validate_education(&row).is_err());
    }
}
