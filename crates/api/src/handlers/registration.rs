//! Handlers for registration wizard state, navigation, and submission.
//!
//! The wizard never trusts a client-reported position: every response is
//! derived from the step records actually present in the database, and the
//! step handlers call [`ensure_step_unlocked`] before touching their tables.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use regportal_core::application::{ensure_editable, ApplicationStatus};
use regportal_core::error::CoreError;
use regportal_core::types::DbId;
use regportal_core::wizard::{generate_application_number, max_reachable_step, WizardController};
use regportal_db::models::application::Application;
use regportal_db::repositories::{ApplicationRepo, RegistrationRepo};
use regportal_events::{PortalEvent, PortalEventKind};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::VerifiedCandidate;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Registration wizard state as seen by the client.
#[derive(Debug, Serialize)]
pub struct RegistrationState {
    pub current_step: u8,
    pub completed_steps: Vec<u8>,
    pub max_reachable_step: u8,
    pub payment_completed: bool,
    pub can_submit: bool,
    pub application: Option<Application>,
}

/// Request body for `POST /registration/goto`.
#[derive(Debug, Deserialize)]
pub struct GoToStepRequest {
    pub step: u8,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/registration/state
///
/// Current wizard position and completion, derived entirely from stored rows.
pub async fn get_state(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
) -> AppResult<Json<DataResponse<RegistrationState>>> {
    let (application, controller) = load_wizard(&state, candidate.user_id).await?;
    Ok(Json(DataResponse {
        data: build_state(application, &controller),
    }))
}

/// POST /api/v1/registration/goto
///
/// Validate a navigation request against the completed steps. Returns the
/// state positioned at the requested step, or 403 if it is still locked.
pub async fn go_to_step(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
    Json(input): Json<GoToStepRequest>,
) -> AppResult<Json<DataResponse<RegistrationState>>> {
    let (application, mut controller) = load_wizard(&state, candidate.user_id).await?;
    controller.go_to_step(input.step)?;
    Ok(Json(DataResponse {
        data: build_state(application, &controller),
    }))
}

/// POST /api/v1/registration/submit
///
/// Finalize the application: requires every step saved and the fee settled.
/// Assigns the application number and flips the status to `submitted`.
/// Repeating the call returns the already-submitted application unchanged.
pub async fn submit(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
) -> AppResult<Json<DataResponse<Application>>> {
    let (application, controller) = load_wizard(&state, candidate.user_id).await?;

    let application = application.ok_or(CoreError::NotFound {
        entity: "application",
        id: candidate.user_id,
    })?;

    if !controller.can_submit() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Complete all steps and the payment before submitting".into(),
        )));
    }

    let application_number = generate_application_number(Utc::now());

    match ApplicationRepo::submit(&state.pool, application.id, &application_number, Utc::now())
        .await?
    {
        Some(submitted) => {
            tracing::info!(
                application_id = submitted.id,
                application_number = %application_number,
                "Application submitted"
            );
            state.event_bus.publish(PortalEvent::new(
                PortalEventKind::ApplicationSubmitted {
                    application_id: submitted.id,
                    application_number,
                },
                candidate.user_id,
            ));
            Ok(Json(DataResponse { data: submitted }))
        }
        // Already submitted: hand back the existing record, keep its number.
        None => Ok(Json(DataResponse { data: application })),
    }
}

// ---------------------------------------------------------------------------
// Shared helpers for step handlers
// ---------------------------------------------------------------------------

/// Load the candidate's application (if any) and a wizard controller built
/// from the stored step records.
pub(crate) async fn load_wizard(
    state: &AppState,
    user_id: DbId,
) -> AppResult<(Option<Application>, WizardController)> {
    let application = ApplicationRepo::find_by_user(&state.pool, user_id).await?;
    let records =
        RegistrationRepo::load_step_records(&state.pool, user_id, application.as_ref().map(|a| a.id))
            .await?;
    Ok((application, WizardController::from_records(&records)))
}

/// The candidate's application, or 404 if none exists yet.
pub(crate) async fn require_application(
    state: &AppState,
    user_id: DbId,
) -> AppResult<Application> {
    ApplicationRepo::find_by_user(&state.pool, user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "application",
                id: user_id,
            })
        })
}

/// Reject writes to a step the candidate has not reached yet.
///
/// A step is unlocked iff it is no further than one past the furthest
/// completed step. Step 1 is always unlocked.
pub(crate) async fn ensure_step_unlocked(
    state: &AppState,
    user_id: DbId,
    step: u8,
) -> AppResult<()> {
    let (_, controller) = load_wizard(state, user_id).await?;
    if step > max_reachable_step(controller.completed_steps()) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Please complete the previous steps before proceeding".into(),
        )));
    }
    Ok(())
}

/// Parse the application status and reject mutations once it is submitted.
pub(crate) fn ensure_application_editable(application: &Application) -> AppResult<()> {
    let status = ApplicationStatus::from_str_db(&application.status)?;
    ensure_editable(status)?;
    Ok(())
}

/// Build the client-facing state from the controller.
fn build_state(application: Option<Application>, controller: &WizardController) -> RegistrationState {
    RegistrationState {
        current_step: controller.current_step(),
        completed_steps: controller.completed_steps().iter().copied().collect(),
        max_reachable_step: max_reachable_step(controller.completed_steps()),
        payment_completed: controller.payment_completed(),
        can_submit: controller.can_submit(),
        application,
    }
}
