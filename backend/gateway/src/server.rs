//! Main HTTP gateway server.
//!
//! Routes, shared state, CORS policy, and the listener loop.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use harvest_vision::VisionProvider;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::GatewayConfig;
use crate::scan_api;

/// Application state shared across routes.
pub struct AppState {
    pub provider: VisionProvider,
    pub request_timeout: Duration,
    pub environment: String,
}

impl AppState {
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        Ok(Self {
            provider: config.vision_provider()?,
            request_timeout: config.request_timeout(),
            environment: config.environment.clone(),
        })
    }
}

/// Build the Axum router with all API routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    // Any-origin CORS: the scan endpoints are consumed by browser frontends
    // on changing hosts. Tightening the origin list is a deployment concern.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/recipe", post(scan_api::scan_recipe))
        .route("/api/invoice", post(scan_api::scan_invoice))
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint.
async fn health(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "environment": state.environment,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Starts the gateway HTTP server.
pub async fn start_server(addr: SocketAddr, state: Arc<AppState>) -> Result<()> {
    let app = build_router(state);

    info!("Harvest gateway listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
