//! Axum route handlers for the Upload Relay.

use axum::extract::{multipart::MultipartRejection, Multipart, State};
use tracing::debug;

use crate::errors::AppError;
use crate::relay::{RelayedResponse, UploadedFile};
use crate::state::AppState;

/// POST /api/analyze-cv (also mounted at the legacy POST /upload)
///
/// Parses the multipart upload, forwards the CV to the scoring service and
/// replies with whatever the scoring service said.
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<RelayedResponse, AppError> {
    let file = read_upload(multipart?, state.relay.field_name()).await?;
    let response = state.relay.forward(file).await?;
    Ok(response)
}

/// Pulls the first file part named `field_name` out of the form.
///
/// Parts with the right name but no filename are plain form values, not files,
/// and are skipped the same way unrelated fields are.
pub async fn read_upload(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(field_name) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        let bytes = field.bytes().await?;
        debug!("Received upload '{file_name}' ({} bytes)", bytes.len());
        return Ok(UploadedFile { file_name, bytes });
    }

    Err(AppError::Validation(format!(
        "Invalid file: no file was uploaded in form field '{field_name}'"
    )))
}
