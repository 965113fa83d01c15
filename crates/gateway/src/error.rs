//! Gateway Error Types
//!
//! Every failure leaves the gateway as `{ "error": message }` with a status
//! derived from the upstream JSON-RPC error code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jsonrpsee::types::error::{INVALID_PARAMS_CODE, INVALID_REQUEST_CODE, PARSE_ERROR_CODE};
use rms_api_rpc::error::code;
use rms_core::AppError;
use rms_sdk::SdkError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Upstream(#[from] SdkError),

    #[error("{0}")]
    Internal(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::Upstream(err) if err.is_unreachable() => StatusCode::BAD_GATEWAY,
            GatewayError::Upstream(SdkError::Rpc { code, .. }) => status_for_code(*code),
            GatewayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            GatewayError::Upstream(SdkError::Rpc { message, .. }) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// HTTP status for a JSON-RPC error code
pub fn status_for_code(rpc_code: i32) -> StatusCode {
    match rpc_code {
        code::NOT_FOUND => StatusCode::NOT_FOUND,
        code::VALIDATION_ERROR
        | code::CONFLICT
        | code::CREATION_FAILED
        | PARSE_ERROR_CODE
        | INVALID_REQUEST_CODE
        | INVALID_PARAMS_CODE => StatusCode::BAD_REQUEST,
        code::STORE_UNAVAILABLE => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<AppError> for GatewayError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(msg) => GatewayError::BadRequest(msg),
            other => GatewayError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::warn!(status = %status, error = %message, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %message, "Request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
