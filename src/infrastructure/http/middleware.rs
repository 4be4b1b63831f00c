//! HTTP Middleware
//!
//! 响应状态日志中间件

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// 响应状态日志中间件
///
/// 5xx 记为 error，4xx 记为 warn，其余记为 debug。
/// 错误详情在 ApiError::into_response() 中记录，这里只记录请求行、状态和耗时。
pub async fn status_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            duration_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            duration_ms,
            "HTTP client error"
        );
    } else {
        tracing::debug!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            duration_ms,
            "HTTP request completed"
        );
    }

    response
}
