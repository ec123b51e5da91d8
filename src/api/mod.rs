pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::*;

use crate::config::ServerConfig;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

/// 构建路由
pub fn build_router(server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/orders", post(clean_orders))
        .route("/orders/export", post(export_orders))
        .layer(ServiceBuilder::new().layer(DefaultBodyLimit::max(server.body_limit_bytes)))
}
