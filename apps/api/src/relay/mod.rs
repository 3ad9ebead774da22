//! Upload relay: forwards an uploaded CV to the scoring service and hands back
//! its verdict untouched.
//!
//! The upstream body is never parsed. Only the transport envelope (status code,
//! bytes) is carried back to the caller.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use reqwest::{
    multipart::{Form, Part},
    Client, Url,
};
use thiserror::Error;
use tracing::{debug, info};

pub mod handlers;

/// Multipart field carrying the CV, both inbound and towards the scoring service.
pub const PDF_FIELD: &str = "pdf_file";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Could not create request to scoring service: {0}")]
    BuildRequest(#[source] reqwest::Error),

    #[error("Could not send request to scoring service: {0}")]
    Send(#[source] reqwest::Error),

    #[error("Scoring service did not respond within {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Could not read response from scoring service: {0}")]
    ReadBody(#[source] reqwest::Error),
}

impl RelayError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RelayError::Timeout(_))
    }
}

/// A file received from the caller, held only until it has been forwarded.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Bytes,
}

/// What the scoring service answered.
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    pub status: u16,
    pub body: Bytes,
}

impl IntoResponse for RelayedResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_GATEWAY);
        (status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

/// Forwards uploads to a single upstream endpoint.
///
/// Cheap to clone: the inner `reqwest::Client` is reference counted and pools
/// connections across requests.
#[derive(Clone)]
pub struct UploadRelay {
    client: Client,
    upstream_url: Url,
    field_name: String,
    timeout: Option<Duration>,
}

impl UploadRelay {
    pub fn new(
        upstream_url: Url,
        field_name: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .context("Failed to build HTTP client for the upload relay")?;

        Ok(Self {
            client,
            upstream_url,
            field_name: field_name.into(),
            timeout,
        })
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    pub fn upstream_url(&self) -> &Url {
        &self.upstream_url
    }

    /// Re-encodes `file` as a fresh multipart body and POSTs it upstream.
    /// Single attempt; any failure is returned to the caller as-is.
    pub async fn forward(&self, file: UploadedFile) -> Result<RelayedResponse, RelayError> {
        let size = file.bytes.len();
        let part = Part::stream_with_length(file.bytes, size as u64)
            .file_name(file.file_name.clone())
            .mime_str("application/octet-stream")
            .map_err(RelayError::BuildRequest)?;
        let form = Form::new().part(self.field_name.clone(), part);

        let request = self
            .client
            .post(self.upstream_url.clone())
            .multipart(form)
            .build()
            .map_err(RelayError::BuildRequest)?;

        debug!(
            "Relaying '{}' ({} bytes) to {}",
            file.file_name, size, self.upstream_url
        );
        let started = Instant::now();

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| self.classify(e, RelayError::Send))?;
        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| self.classify(e, RelayError::ReadBody))?;

        info!(
            "Scoring service answered {} for '{}' in {}ms ({} bytes)",
            status,
            file.file_name,
            started.elapsed().as_millis(),
            body.len()
        );

        Ok(RelayedResponse { status, body })
    }

    fn classify(
        &self,
        error: reqwest::Error,
        otherwise: fn(reqwest::Error) -> RelayError,
    ) -> RelayError {
        match self.timeout {
            Some(timeout) if error.is_timeout() => RelayError::Timeout(timeout),
            _ => otherwise(error),
        }
    }
}
