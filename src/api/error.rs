use crate::error::OrderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 接口层错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求体不是合法的订单数组
    #[error("Cannot parse JSON: {0}")]
    MalformedBatchPayload(String),

    #[error(transparent)]
    Processing(#[from] OrderError),

    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            ApiError::MalformedBatchPayload(_) => (StatusCode::BAD_REQUEST, "Cannot parse JSON"),
            ApiError::Processing(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Invalid order line"),
            ApiError::Export(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Export failed"),
        };
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = ErrorResponse {
            error: error.to_string(),
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
