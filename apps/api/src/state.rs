use crate::relay::UploadRelay;
use crate::render::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Forwards CV uploads to the scoring service. Owns the upstream URL and field name.
    pub relay: UploadRelay,
    /// Page geometry used by the CV renderer.
    pub page_config: PageConfig,
    /// Hard cap on the upload body, enforced on the relay routes only.
    pub upload_limit_bytes: usize,
}
