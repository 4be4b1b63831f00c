//! HTTP Routes
//!
//! 路由表：
//! - /      GET   健康检查
//! - /data  POST  处理 JSON 载荷
//!
//! 已注册路径上的其他方法返回 405，未注册路径返回 404。

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::health_check).fallback(handlers::method_not_allowed),
        )
        .route(
            "/data",
            post(handlers::process_data).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
}
