//! Mapping from pipeline errors to HTTP responses.
//!
//! The body is always `{"error": "..."}`, the convention the frontends
//! already consume. Malformed or invalid model replies map to 500 even
//! though the caller's own request was fine; that status choice is a
//! preserved contract with the existing frontends.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use harvest_core::{ProviderFault, ScanError};
use serde_json::json;

/// A pipeline error leaving the gateway.
#[derive(Debug)]
pub struct ApiError(pub ScanError);

impl From<ScanError> for ApiError {
    fn from(err: ScanError) -> Self {
        ApiError(err)
    }
}

/// The status a given pipeline error maps to.
pub fn status_for(err: &ScanError) -> StatusCode {
    match err {
        ScanError::Payload(_) => StatusCode::BAD_REQUEST,
        ScanError::Parse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        ScanError::Invalid(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ScanError::Provider { fault, .. } => match fault {
            ProviderFault::Auth => StatusCode::INTERNAL_SERVER_ERROR,
            ProviderFault::RateLimit => StatusCode::TOO_MANY_REQUESTS,
            ProviderFault::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ProviderFault::Upstream => StatusCode::BAD_GATEWAY,
        },
        ScanError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ScanError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        tracing::error!(status = %status, error = %self.0, "Scan request failed");
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harvest_core::Violation;

    #[test]
    fn payload_errors_are_the_callers_fault() {
        assert_eq!(
            status_for(&ScanError::Payload("no image".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn model_reply_failures_keep_the_legacy_500() {
        let parse = ScanError::Parse { snippet: "x".into(), line: 1, column: 1 };
        assert_eq!(status_for(&parse), StatusCode::INTERNAL_SERVER_ERROR);

        let invalid = ScanError::Invalid(vec![Violation::MissingField { field: "title".into() }]);
        assert_eq!(status_for(&invalid), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn provider_faults_map_to_distinct_statuses() {
        let err = |fault| ScanError::Provider {
            provider: "openai".into(),
            fault,
            message: "m".into(),
        };
        assert_eq!(status_for(&err(ProviderFault::Auth)), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_for(&err(ProviderFault::RateLimit)), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(status_for(&err(ProviderFault::Timeout)), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(status_for(&err(ProviderFault::Upstream)), StatusCode::BAD_GATEWAY);
    }
}
