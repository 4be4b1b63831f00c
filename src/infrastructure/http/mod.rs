//! HTTP Layer - RESTful API
//!
//! Endpoints:
//! - /      GET   健康检查
//! - /data  POST  处理 JSON 载荷（`command` 字段会交给 shell 执行）

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{build_router, shutdown_signal, HttpServer, ServerConfig};
pub use state::AppState;
