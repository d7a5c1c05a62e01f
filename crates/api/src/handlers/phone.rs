//! Handlers for phone verification (`/profile/phone`).
//!
//! A six-digit code is issued per mobile number, valid for ten minutes and
//! three attempts. Verification flips `phone_verified` on the profile, which
//! unlocks the registration wizard.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use regportal_core::error::CoreError;
use regportal_core::types::Timestamp;
use regportal_core::{otp, validation};
use regportal_db::models::phone_otp::CreatePhoneOtp;
use regportal_db::models::profile::Profile;
use regportal_db::repositories::{PhoneOtpRepo, ProfileRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /profile/phone/request-otp`.
#[derive(Debug, Deserialize)]
pub struct RequestOtpRequest {
    pub mobile: String,
}

/// Response body for a successfully issued code.
#[derive(Debug, Serialize)]
pub struct OtpIssuedResponse {
    pub mobile: String,
    pub expires_at: Timestamp,
}

/// Request body for `POST /profile/phone/verify-otp`.
#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub mobile: String,
    pub code: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/profile/phone/request-otp
///
/// Issue a fresh verification code for the given mobile number and record it
/// on the candidate's profile. Issuing a new code supersedes earlier ones
/// (verification always checks the latest unused code).
pub async fn request_otp(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<RequestOtpRequest>,
) -> AppResult<Json<DataResponse<OtpIssuedResponse>>> {
    validation::validate_mobile(&input.mobile)?;

    ProfileRepo::set_mobile(&state.pool, auth_user.user_id, &input.mobile)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "profile",
                id: auth_user.user_id,
            })
        })?;

    let code = otp::generate_code();
    let expires_at = otp::expires_at(Utc::now());

    let record = PhoneOtpRepo::create(
        &state.pool,
        CreatePhoneOtp {
            user_id: auth_user.user_id,
            mobile: input.mobile.clone(),
            code,
            purpose: otp::PURPOSE_REGISTRATION.to_string(),
            expires_at,
        },
    )
    .await?;

    // SMS delivery is handled out-of-band; the code is only logged at debug
    // level for local development.
    tracing::info!(user_id = auth_user.user_id, "Verification code issued");
    tracing::debug!(code = %record.code, "OTP code (dev only)");

    Ok(Json(DataResponse {
        data: OtpIssuedResponse {
            mobile: input.mobile,
            expires_at: record.expires_at,
        },
    }))
}

/// POST /api/v1/profile/phone/verify-otp
///
/// Verify the latest active code for the mobile number. A wrong code burns
/// one of the three attempts; a correct one marks the phone verified.
pub async fn verify_otp(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<VerifyOtpRequest>,
) -> AppResult<Json<DataResponse<Profile>>> {
    validation::validate_mobile(&input.mobile)?;
    otp::validate_code_format(&input.code)?;

    let record = PhoneOtpRepo::find_latest_active(&state.pool, auth_user.user_id, &input.mobile)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "No active verification code. Request a new one.".into(),
            ))
        })?;

    if !otp::attempts_remaining(record.attempts as u32) {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Too many attempts. Request a new code.".into(),
        )));
    }

    if record.code != input.code {
        let attempts = PhoneOtpRepo::increment_attempts(&state.pool, record.id).await?;
        let message = if otp::attempts_remaining(attempts as u32) {
            "Invalid verification code"
        } else {
            "Invalid verification code. Attempt limit reached, request a new code."
        };
        return Err(AppError::Core(CoreError::Unauthorized(message.into())));
    }

    PhoneOtpRepo::mark_used(&state.pool, record.id).await?;

    let profile = ProfileRepo::mark_phone_verified(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "profile",
                id: auth_user.user_id,
            })
        })?;

    tracing::info!(user_id = auth_user.user_id, "Phone number verified");

    Ok(Json(DataResponse { data: profile }))
}
