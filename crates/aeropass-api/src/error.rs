//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! The single place where the domain error taxonomy is mapped to HTTP
//! status codes and the JSON error envelope. Upstream error bodies and
//! credential material never reach a response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use aeropass_client::WalletApiError;
use aeropass_core::ValidationError;
use aeropass_token::SigningError;

/// JSON error envelope returned on every failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable context, omitted where it could leak internals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Application-level error mapped to a status code at the boundary.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed or invalid request input (400).
    #[error("validation error: {0}")]
    Validation(String),

    /// The tenant code is unknown to this deployment (404).
    #[error("unknown tenant: {0}")]
    TenantNotFound(String),

    /// The referenced resource does not exist upstream (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The wallet provider failed or answered ambiguously (502).
    #[error("upstream wallet API error: {0}")]
    Upstream(String),

    /// Token signing failed (500). Detail is logged, never returned.
    #[error("signing error: {0}")]
    Signing(String),

    /// Anything else (500). Detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::TenantNotFound(_) => (StatusCode::NOT_FOUND, "TENANT_NOT_FOUND"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            Self::Signing(_) => (StatusCode::INTERNAL_SERVER_ERROR, "SIGNING_ERROR"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // 500-class detail stays in the log only.
        let detail = match &self {
            Self::Signing(_) | Self::Internal(_) => None,
            other => Some(other.to_string()),
        };

        match &self {
            Self::Signing(_) | Self::Internal(_) => {
                tracing::error!(error = %self, "request failed");
            }
            Self::Upstream(_) => tracing::warn!(error = %self, "upstream wallet API failure"),
            _ => {}
        }

        let body = ErrorBody {
            error: code.to_string(),
            detail,
        };
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<SigningError> for AppError {
    fn from(err: SigningError) -> Self {
        Self::Signing(err.to_string())
    }
}

impl From<WalletApiError> for AppError {
    fn from(err: WalletApiError) -> Self {
        match err {
            WalletApiError::NotFound { resource_id } => {
                Self::NotFound(format!("wallet resource {resource_id} not found"))
            }
            // Observed behavior: an upstream 409 is treated as upstream
            // ambiguity, not a client conflict — surfaced as 502 with
            // the resource id in the detail.
            WalletApiError::Conflict { resource_id } => {
                Self::Upstream(format!("resource {resource_id} already exists upstream"))
            }
            WalletApiError::InvalidConfig { reason } => Self::Internal(reason),
            other => Self::Upstream(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let (status, code) = AppError::Validation("bad date".into()).status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[test]
    fn not_found_maps_to_404() {
        let (status, code) = AppError::NotFound("x".into()).status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
    }

    #[test]
    fn upstream_maps_to_502() {
        let (status, code) = AppError::Upstream("timeout".into()).status_and_code();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "UPSTREAM_ERROR");
    }

    #[test]
    fn upstream_conflict_becomes_502_with_id_in_detail() {
        let err = AppError::from(WalletApiError::Conflict {
            resource_id: "3388000000022913608.20250101".into(),
        });
        let (status, _) = err.status_and_code();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("3388000000022913608.20250101"));
    }

    #[test]
    fn upstream_not_found_becomes_404() {
        let err = AppError::from(WalletApiError::NotFound {
            resource_id: "1.X".into(),
        });
        let (status, _) = err.status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    use http_body_util::BodyExt;

    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn signing_errors_hide_detail() {
        let (status, body) =
            response_parts(AppError::Signing("key parse failed".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "SIGNING_ERROR");
        assert!(body.detail.is_none());
    }

    #[tokio::test]
    async fn validation_detail_reaches_the_client() {
        let (status, body) =
            response_parts(AppError::Validation("unparsable local date/time".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.detail.unwrap().contains("unparsable"));
    }

    #[test]
    fn error_body_omits_absent_detail() {
        let body = ErrorBody {
            error: "INTERNAL_ERROR".into(),
            detail: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"INTERNAL_ERROR"}"#);
    }
}
