//! Handlers for the candidate dashboard.

use axum::extract::State;
use axum::Json;
use regportal_core::application::ApplicationStatus;
use regportal_core::wizard::TOTAL_STEPS;
use regportal_db::models::application::ApplicationWithPost;
use regportal_db::models::document::Document;
use regportal_db::models::payment::Payment;
use regportal_db::models::personal_info::PersonalInfo;
use regportal_db::models::profile::Profile;
use regportal_db::repositories::{
    ApplicationRepo, DocumentRepo, PaymentRepo, PersonalInfoRepo, ProfileRepo, RegistrationRepo,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Everything the dashboard shows in one payload.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub profile: Option<Profile>,
    pub personal_info: Option<PersonalInfo>,
    pub applications: Vec<ApplicationWithPost>,
    pub documents: Vec<Document>,
    pub payments: Vec<Payment>,
    /// 0..=100, how far along the registration is.
    pub completion_percentage: u8,
}

/// GET /api/v1/dashboard/summary
///
/// Aggregated view of the candidate's registration. Available as soon as the
/// account exists, before phone verification, so the dashboard can point the
/// candidate at the next thing to do.
pub async fn summary(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let user_id = auth_user.user_id;

    let profile = ProfileRepo::find_by_user(&state.pool, user_id).await?;
    let personal_info = PersonalInfoRepo::find_by_user(&state.pool, user_id).await?;
    let applications = ApplicationRepo::list_with_post_by_user(&state.pool, user_id).await?;
    let documents = DocumentRepo::list_by_user(&state.pool, user_id).await?;

    let application_id = applications.first().map(|a| a.id);
    let payments = match application_id {
        Some(id) => PaymentRepo::list_by_application(&state.pool, id).await?,
        None => Vec::new(),
    };

    let records = RegistrationRepo::load_step_records(&state.pool, user_id, application_id).await?;
    let submitted = applications
        .iter()
        .any(|a| a.status == ApplicationStatus::Submitted.as_str());
    let completion_percentage = completion_percentage(records.completed_steps().len(), submitted);

    Ok(Json(DataResponse {
        data: DashboardSummary {
            profile,
            personal_info,
            applications,
            documents,
            payments,
            completion_percentage,
        },
    }))
}

/// Registration progress as a percentage of the seven wizard steps, with
/// submission counting as fully done.
fn completion_percentage(completed_steps: usize, submitted: bool) -> u8 {
    if submitted {
        return 100;
    }
    ((completed_steps * 100) / TOTAL_STEPS as usize) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_progress_is_zero() {
        assert_eq!(completion_percentage(0, false), 0);
    }

    #[test]
    fn test_submitted_is_full() {
        assert_eq!(completion_percentage(3, true), 100);
    }

    #[test]
    fn test_partial_progress() {
        assert_eq!(completion_percentage(3, false), 42);
        assert_eq!(completion_percentage(6, false), 85);
    }
}
