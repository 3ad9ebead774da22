mod config;
mod errors;
mod models;
mod relay;
mod render;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::relay::{UploadRelay, PDF_FIELD};
use crate::render::PageConfig;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CVnatization API v{}", env!("CARGO_PKG_VERSION"));

    let relay = UploadRelay::new(config.upstream_url.clone(), PDF_FIELD, config.upstream_timeout)?;
    match config.upstream_timeout {
        Some(timeout) => info!(
            "Upload relay -> {} (timeout {}s)",
            relay.upstream_url(),
            timeout.as_secs()
        ),
        None => info!("Upload relay -> {} (no timeout)", relay.upstream_url()),
    }

    let state = AppState {
        relay,
        page_config: PageConfig::a4(),
        upload_limit_bytes: config.upload_limit_bytes,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config)?),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Browser access is limited to the one configured frontend origin.
fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let origin: HeaderValue = config.allowed_origin.parse().with_context(|| {
        format!(
            "ALLOWED_ORIGIN '{}' is not a valid header value",
            config.allowed_origin
        )
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}
