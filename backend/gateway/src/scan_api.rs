//! Scan endpoints (`POST /api/recipe`, `POST /api/invoice`).
//!
//! Both endpoints run the same pipeline: decode payload, call the vision
//! provider, extract, validate. The document kind is the only difference.

use std::sync::Arc;

use axum::{extract::State, Json};
use harvest_core::{DocKind, ScanError, ScanRecord};
use logging::{ScanEvent, ScanEventLogger};
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    /// Base64 data URL (`data:image/jpeg;base64,...`) or bare base64.
    pub image: String,
}

/// Handler for `POST /api/recipe`.
pub async fn scan_recipe(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ScanRequest>,
) -> Result<Json<ScanRecord>, ApiError> {
    run_scan(&state, DocKind::Recipe, &payload).await
}

/// Handler for `POST /api/invoice`.
pub async fn scan_invoice(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ScanRequest>,
) -> Result<Json<ScanRecord>, ApiError> {
    run_scan(&state, DocKind::Invoice, &payload).await
}

async fn run_scan(
    state: &AppState,
    kind: DocKind,
    payload: &ScanRequest,
) -> Result<Json<ScanRecord>, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let record = scan_pipeline(state, kind, &payload.image, &request_id)
        .await
        .map_err(|err| {
            ScanEventLogger::log_event(&request_id, ScanEvent::Rejected {
                reason: err.to_string(),
            });
            ApiError(err)
        })?;
    ScanEventLogger::log_event(&request_id, ScanEvent::Completed { kind: kind.to_string() });
    Ok(Json(record))
}

async fn scan_pipeline(
    state: &AppState,
    kind: DocKind,
    image: &str,
    request_id: &str,
) -> Result<ScanRecord, ScanError> {
    let payload = harvest_media::decode_data_url(image)?;
    info!(
        request_id,
        kind = %kind,
        mime_type = %payload.mime_type,
        bytes = payload.data.len(),
        "Accepted scan payload"
    );
    ScanEventLogger::log_event(request_id, ScanEvent::PayloadAccepted {
        kind: kind.to_string(),
        mime_type: payload.mime_type.clone(),
        bytes: payload.data.len(),
    });

    let raw = harvest_vision::scan_image(
        &state.provider,
        &payload.data,
        &payload.mime_type,
        kind,
        state.request_timeout,
    )
    .await?;
    debug!(request_id, "Raw model reply: {}", logging::redact_sensitive_data(&raw));
    ScanEventLogger::log_event(request_id, ScanEvent::ModelReply {
        provider: state.provider.name().to_string(),
        raw_reply: raw.clone(),
    });

    let doc = harvest_extract::extract(&raw)?;
    harvest_extract::validate(&doc, kind).map_err(ScanError::Invalid)
}
