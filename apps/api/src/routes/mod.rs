pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::relay::handlers::handle_analyze_cv;
use crate::render::handlers::handle_generate_cv;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let relay_routes = Router::new()
        .route("/api/analyze-cv", post(handle_analyze_cv))
        // Legacy path still used by the first frontend.
        .route("/upload", post(handle_analyze_cv))
        .layer(DefaultBodyLimit::max(state.upload_limit_bytes));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate-cv", post(handle_generate_cv))
        .merge(relay_routes)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use reqwest::Url;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::relay::{UploadRelay, PDF_FIELD};
    use crate::render::PageConfig;

    fn app() -> Router {
        let url = Url::parse("http://127.0.0.1:9/predict").unwrap();
        build_router(AppState {
            relay: UploadRelay::new(url, PDF_FIELD, None).unwrap(),
            page_config: PageConfig::a4(),
            upload_limit_bytes: 10 << 20,
        })
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "cvnatization-api");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_generate_rejects_get() {
        let response = app()
            .oneshot(Request::get("/api/generate-cv").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
