use crate::api::error::ApiError;
use crate::export;
use crate::models::{CleanedOrder, InputOrder};
use crate::service;
use axum::{
    extract::{rejection::JsonRejection, Json},
    http::header,
    response::IntoResponse,
};

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 批量清洗订单
pub async fn clean_orders(
    payload: Result<Json<Vec<InputOrder>>, JsonRejection>,
) -> Result<Json<Vec<CleanedOrder>>, ApiError> {
    let orders = parse_batch(payload)?;
    let cleaned = service::process_orders(&orders)?;
    Ok(Json(cleaned))
}

/// 批量清洗并以 CSV 返回
pub async fn export_orders(
    payload: Result<Json<Vec<InputOrder>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let orders = parse_batch(payload)?;
    let cleaned = service::process_orders(&orders)?;
    let body = export::to_csv_string(&cleaned)?;
    Ok(([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body))
}

fn parse_batch(payload: Result<Json<Vec<InputOrder>>, JsonRejection>) -> Result<Vec<InputOrder>, ApiError> {
    match payload {
        Ok(Json(orders)) => Ok(orders),
        Err(rejection) => {
            tracing::warn!("拒绝无法解析的请求体: {}", rejection.body_text());
            Err(ApiError::MalformedBatchPayload(rejection.body_text()))
        }
    }
}
