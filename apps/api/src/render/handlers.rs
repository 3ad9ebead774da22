//! Axum route handler for the CV generator.

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::errors::AppError;
use crate::models::cv::CvData;
use crate::render::render_cv_pdf;
use crate::state::AppState;

/// POST /api/generate-cv
///
/// Decodes the body as JSON whatever its declared content type, renders the CV
/// and returns it as a `cv.pdf` attachment. The response is only built once the
/// whole document has been serialized.
pub async fn handle_generate_cv(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let cv: CvData = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Undecodable CV payload: {e}");
        AppError::Validation("Invalid request body".to_string())
    })?;

    let page_config = state.page_config.clone();
    let pdf = tokio::task::spawn_blocking(move || render_cv_pdf(&cv, &page_config))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("CV render task failed: {e}")))??;

    info!("Generated CV PDF ({} bytes)", pdf.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, "attachment; filename=cv.pdf"),
        ],
        pdf,
    )
        .into_response())
}
