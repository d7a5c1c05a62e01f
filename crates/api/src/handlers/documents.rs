//! Handlers for step 5 (document uploads).
//!
//! Uploads arrive as multipart form data with a `document_type` text field
//! and a `file` part. The bytes go to the object store; the row in
//! `documents` is what marks the step complete.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use regportal_core::error::CoreError;
use regportal_core::types::DbId;
use regportal_db::models::document::{CreateDocument, Document};
use regportal_db::repositories::DocumentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::registration::{
    ensure_application_editable, ensure_step_unlocked, require_application,
};
use crate::middleware::auth::VerifiedCandidate;
use crate::response::DataResponse;
use crate::state::AppState;

/// Document slots a candidate may fill.
const ALLOWED_DOCUMENT_TYPES: &[&str] = &[
    "photo",
    "signature",
    "aadhar_card",
    "matriculation_certificate",
    "qualification_certificate",
    "caste_certificate",
    "disability_certificate",
    "experience_certificate",
];

/// Accepted content types for uploads.
const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "application/pdf"];

/// Upload size cap in bytes (5 MiB).
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// GET /api/v1/registration/documents
pub async fn list_documents(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
) -> AppResult<Json<DataResponse<Vec<Document>>>> {
    let docs = DocumentRepo::list_by_user(&state.pool, candidate.user_id).await?;
    Ok(Json(DataResponse { data: docs }))
}

/// POST /api/v1/registration/documents
///
/// Upload one document. Multipart fields: `document_type`, `file`.
pub async fn upload_document(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Document>>)> {
    ensure_step_unlocked(&state, candidate.user_id, 5).await?;

    let application = require_application(&state, candidate.user_id).await?;
    ensure_application_editable(&application)?;

    let mut document_type: Option<String> = None;
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("document_type") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid document_type: {e}")))?;
                document_type = Some(value);
            }
            Some("file") => {
                let file_name = field
                    .file_name()
                    .unwrap_or("upload")
                    .to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read file: {e}")))?;
                file = Some((file_name, mime_type, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let document_type = document_type
        .ok_or_else(|| AppError::BadRequest("Missing document_type field".into()))?;
    let (file_name, mime_type, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing file field".into()))?;

    validate_upload(&document_type, &mime_type, bytes.len())?;

    // Grouped by slot: e.g. photos/42_1724680000000.jpg
    let file_path = format!(
        "{}s/{}_{}.{}",
        document_type,
        candidate.user_id,
        Utc::now().timestamp_millis(),
        extension_for(&mime_type),
    );

    let file_url = state.storage.put(&file_path, &bytes).await?;

    let doc = DocumentRepo::create(
        &state.pool,
        CreateDocument {
            user_id: candidate.user_id,
            application_id: application.id,
            document_type,
            file_name,
            file_path,
            file_url,
            file_size: bytes.len() as i64,
            mime_type,
        },
    )
    .await?;

    tracing::info!(
        user_id = candidate.user_id,
        document_id = doc.id,
        document_type = %doc.document_type,
        "Document uploaded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: doc })))
}

/// DELETE /api/v1/registration/documents/{id}
///
/// Remove the row first, then the stored bytes; a dangling file is harmless
/// while a dangling row is not.
pub async fn delete_document(
    State(state): State<AppState>,
    candidate: VerifiedCandidate,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let application = require_application(&state, candidate.user_id).await?;
    ensure_application_editable(&application)?;

    let doc = DocumentRepo::find_by_id(&state.pool, id, candidate.user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "document",
            id,
        })?;

    DocumentRepo::delete(&state.pool, id, candidate.user_id).await?;
    state.storage.delete(&doc.file_path).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reject uploads with an unknown slot, disallowed content type, or
/// oversized payload.
fn validate_upload(document_type: &str, mime_type: &str, size: usize) -> Result<(), CoreError> {
    if !ALLOWED_DOCUMENT_TYPES.contains(&document_type) {
        return Err(CoreError::Validation(format!(
            "Unknown document type '{document_type}'"
        )));
    }
    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(CoreError::Validation(format!(
            "Unsupported file type '{mime_type}'. Allowed: JPEG, PNG, PDF"
        )));
    }
    if size == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "File too large ({size} bytes). Maximum is {MAX_UPLOAD_BYTES} bytes"
        )));
    }
    Ok(())
}

/// File extension for a stored object, derived from the content type.
fn extension_for(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "application/pdf" => "pdf",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_upload_passes() {
        assert!(validate_upload("photo", "image/jpeg", 1024).is_ok());
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(validate_upload("selfie", "image/jpeg", 1024).is_err());
    }

    #[test]
    fn test_bad_mime_rejected() {
        assert!(validate_upload("photo", "application/zip", 1024).is_err());
    }

    #[test]
    fn test_oversized_rejected() {
        assert!(validate_upload("photo", "image/png", MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn test_empty_rejected() {
        assert!(validate_upload("photo", "image/png", 0).is_err());
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(extension_for("image/jpeg"), "jpg");
        assert_eq!(extension_for("application/pdf"), "pdf");
        assert_eq!(extension_for("application/unknown"), "bin");
    }
}
