//! Handlers for step 6 (fee payment).
//!
//! The authoritative payment status is always the latest row in `payments`
//! for the application. SC/ST candidates are fee-exempt: fetching payment
//! state settles their fee by recording a zero-amount completed row, which
//! unlocks Review exactly like a paid checkout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use regportal_core::application::ApplicationStatus;
use regportal_core::category::Category;
use regportal_core::error::CoreError;
use regportal_core::payment::{
    resolve_status, verify_checkout_signature, PaymentMethod, PaymentStatus,
};
use regportal_core::types::DbId;
use regportal_db::models::application::Application;
use regportal_db::models::payment::{CreatePayment, Payment};
use regportal_db::repositories::{
    ApplicationRepo, CategoryPaymentRepo, PaymentRepo, PersonalInfoRepo,
};
use regportal_events::{PortalEvent, PortalEventKind};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::registration::{
    ensure_application_editable, ensure_step_unlocked, require_application,
};
use crate::middleware::auth::VerifiedCandidate;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Payment state for the candidate's application.
#[derive(Debug, Serialize)]
pub struct PaymentState {
    pub category: String,
    pub amount: f64,
    pub fee_exempt: bool,
    pub payment_completed: bool,
    pub latest_payment: Option<Payment>,
}

/// Request body for `POST /registration/payment/checkout`.
///
/// Carries the gateway's order id, payment id, and signature verbatim.
#[derive(Debug, Deserialize)]
pub struct CheckoutCallback {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
}

/// Request body for `POST /registration/payment/failure`.
#[derive(Debug, Deserialize)]
pub struct FailureCallback {
    pub error_code: Option<String>,
    pub error_description: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/registration/payment
///
/// Fee and payment status for step 6. For exempt categories this call also
/// settles the fee (idempotently) so the step completes without a checkout.
pub async fn get_payment_state(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
) -> AppResult<Json<DataResponse<PaymentState>>> {
    ensure_step_unlocked(&state, candidate.user_id, 6).await?;
    let application = require_application(&state, candidate.user_id).await?;

    let (category, amount) = resolve_fee(&state, candidate.user_id).await?;

    let mut latest = PaymentRepo::latest_by_application(&state.pool, application.id).await?;
    let mut status = resolve_status(latest.as_ref().map(|p| p.payment_status.as_str()))?;

    if category.is_fee_exempt() && !status.unlocks_review() {
        let payment = record_completed_payment(
            &state,
            &application,
            candidate.user_id,
            0.0,
            PaymentMethod::Exempted,
            None,
        )
        .await?;
        tracing::info!(
            application_id = application.id,
            category = %category.as_str(),
            "Fee exemption recorded"
        );
        latest = Some(payment);
        status = PaymentStatus::Completed;
    }

    Ok(Json(DataResponse {
        data: PaymentState {
            category: category.as_str().to_string(),
            amount,
            fee_exempt: category.is_fee_exempt(),
            payment_completed: status.unlocks_review(),
            latest_payment: latest,
        },
    }))
}

/// POST /api/v1/registration/payment/checkout
///
/// Success callback from the checkout widget. The signature is verified
/// against the configured key secret before anything is written; a bad
/// signature commits nothing.
pub async fn checkout(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
    Json(input): Json<CheckoutCallback>,
) -> AppResult<Json<DataResponse<Payment>>> {
    ensure_step_unlocked(&state, candidate.user_id, 6).await?;
    let application = require_application(&state, candidate.user_id).await?;
    ensure_application_editable(&application)?;

    verify_checkout_signature(
        &input.razorpay_order_id,
        &input.razorpay_payment_id,
        &input.razorpay_signature,
        &state.config.payment_key_secret,
    )?;

    let (_, amount) = resolve_fee(&state, candidate.user_id).await?;

    let payment = record_completed_payment(
        &state,
        &application,
        candidate.user_id,
        amount,
        PaymentMethod::Razorpay,
        Some(&input),
    )
    .await?;

    tracing::info!(
        application_id = application.id,
        payment_id = payment.id,
        "Checkout payment verified and recorded"
    );

    Ok(Json(DataResponse { data: payment }))
}

/// POST /api/v1/registration/payment/failure
///
/// Failure callback. Nothing is committed; the latest row (or its absence)
/// keeps the status at pending so the candidate can retry.
pub async fn payment_failure(
    candidate: VerifiedCandidate,
    Json(input): Json<FailureCallback>,
) -> AppResult<StatusCode> {
    tracing::warn!(
        user_id = candidate.user_id,
        error_code = input.error_code.as_deref().unwrap_or("unknown"),
        error_description = input.error_description.as_deref().unwrap_or(""),
        "Checkout reported a payment failure"
    );
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The candidate's category and the fee it owes, from the fee schedule.
async fn resolve_fee(state: &AppState, user_id: DbId) -> AppResult<(Category, f64)> {
    let info = PersonalInfoRepo::find_by_user(&state.pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "personal info",
            id: user_id,
        })?;

    let category = Category::from_str_db(&info.category)?;

    let fee = CategoryPaymentRepo::find_by_category(&state.pool, category.as_str())
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "No fee configured for category {}",
                category.as_str()
            ))
        })?;

    Ok((category, fee.amount))
}

/// Insert a completed payment row, advance the application status, and
/// publish the completion event.
async fn record_completed_payment(
    state: &AppState,
    application: &Application,
    user_id: DbId,
    amount: f64,
    method: PaymentMethod,
    checkout: Option<&CheckoutCallback>,
) -> AppResult<Payment> {
    let payment = PaymentRepo::create(
        &state.pool,
        CreatePayment {
            application_id: application.id,
            amount,
            payment_status: PaymentStatus::Completed.as_str().to_string(),
            payment_method: method.as_str().to_string(),
            transaction_id: checkout.map(|c| c.razorpay_payment_id.clone()),
            razorpay_order_id: checkout.map(|c| c.razorpay_order_id.clone()),
            razorpay_payment_id: checkout.map(|c| c.razorpay_payment_id.clone()),
            razorpay_signature: checkout.map(|c| c.razorpay_signature.clone()),
            payment_date: Some(Utc::now()),
        },
    )
    .await?;

    ApplicationRepo::update_status(
        &state.pool,
        application.id,
        ApplicationStatus::PaymentCompleted.as_str(),
    )
    .await?;

    state.event_bus.publish(PortalEvent::new(
        PortalEventKind::PaymentCompleted {
            application_id: application.id,
            payment_id: payment.id,
        },
        user_id,
    ));

    Ok(payment)
}
