//! Handlers for step 1 (personal information).
//!
//! Saving step 1 is also what creates the draft application: the selected
//! post is bound here and one application per candidate is enforced by the
//! unique constraint underneath `ensure_draft`.

use axum::extract::State;
use axum::Json;
use regportal_core::category::Category;
use regportal_core::error::CoreError;
use regportal_core::validation;
use regportal_db::models::personal_info::{PersonalInfo, UpsertPersonalInfo};
use regportal_db::repositories::{ApplicationRepo, PersonalInfoRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::registration::ensure_application_editable;
use crate::middleware::auth::VerifiedCandidate;
use crate::response::DataResponse;
use crate::state::AppState;

/// Accepted values for the gender field.
const GENDERS: &[&str] = &["male", "female", "other"];

/// GET /api/v1/registration/personal-info
pub async fn get_personal_info(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
) -> AppResult<Json<DataResponse<Option<PersonalInfo>>>> {
    let info = PersonalInfoRepo::find_by_user(&state.pool, candidate.user_id).await?;
    Ok(Json(DataResponse { data: info }))
}

/// PUT /api/v1/registration/personal-info
///
/// Upsert step 1. Creates the draft application on first save.
pub async fn upsert_personal_info(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
    Json(input): Json<UpsertPersonalInfo>,
) -> AppResult<Json<DataResponse<PersonalInfo>>> {
    validate_personal_info(&input)?;

    let post = PostRepo::find_by_id(&state.pool, input.post_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "post",
            id: input.post_id,
        })?;
    if !post.is_active {
        return Err(AppError::Core(CoreError::Validation(
            "The selected post is no longer open for applications".into(),
        )));
    }

    // Step 1 is always unlocked, but a submitted application is frozen.
    if let Some(existing) = ApplicationRepo::find_by_user(&state.pool, candidate.user_id).await? {
        ensure_application_editable(&existing)?;
    }

    let application =
        ApplicationRepo::ensure_draft(&state.pool, candidate.user_id, input.post_id).await?;

    let info =
        PersonalInfoRepo::upsert(&state.pool, candidate.user_id, application.id, &input).await?;

    Ok(Json(DataResponse { data: info }))
}

/// Field-level validation for the step 1 payload.
fn validate_personal_info(input: &UpsertPersonalInfo) -> Result<(), CoreError> {
    validation::validate_required("first_name", &input.first_name)?;
    validation::validate_required("last_name", &input.last_name)?;
    validation::validate_required("father_name", &input.father_name)?;
    validation::validate_required("mother_name", &input.mother_name)?;
    validation::validate_required("address", &input.address)?;
    validation::validate_required("district", &input.district)?;
    validation::validate_required("state", &input.state)?;

    validation::validate_aadhaar(&input.aadhar_number)?;
    validation::validate_pincode(&input.pincode)?;
    if let Some(alt) = input.alternative_mobile.as_deref() {
        if !alt.is_empty() {
            validation::validate_mobile(alt)?;
        }
    }

    if !GENDERS.contains(&input.gender.as_str()) {
        return Err(CoreError::Validation(format!(
            "Invalid gender '{}'. Expected one of: male, female, other",
            input.gender
        )));
    }

    // Rejects unknown categories; the value also drives the fee schedule.
    Category::from_str_db(&input.category)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_input() -> UpsertPersonalInfo {
        UpsertPersonalInfo {
            post_id: 1,
            first_name: "Asha".into(),
            middle_name: None,
            last_name: "Kumari".into(),
            father_name: "Ram".into(),
            mother_name: "Sita".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1998, 4, 12).unwrap(),
            gender: "female".into(),
            category: "general".into(),
            aadhar_number: "123456789012".into(),
            address: "12 Main Road".into(),
            state: "Jharkhand".into(),
            district: "Ranchi".into(),
            pincode: "834001".into(),
            alternative_mobile: None,
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(validate_personal_info(&valid_input()).is_ok());
    }

    #[test]
    fn test_bad_aadhaar_rejected() {
        let mut input = valid_input();
        input.aadhar_number = "12345".into();
        assert!(validate_personal_info(&input).is_err());
    }

    #[test]
    fn test_bad_gender_rejected() {
        let mut input = valid_input();
        input.gender = "unknown".into();
        assert!(validate_personal_info(&input).is_err());
    }

    #[test]
    fn test_bad_category_rejected() {
        let mut input = valid_input();
        input.category = "not-a-category".into();
        assert!(validate_personal_info(&input).is_err());
    }

    #[test]
    fn test_empty_alternative_mobile_allowed() {
        let mut input = valid_input();
        input.alternative_mobile = Some(String::new());
        assert!(validate_personal_info(&input).is_ok());
    }
}
