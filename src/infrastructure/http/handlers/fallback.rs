//! Routing Fallbacks
//!
//! 路由未命中时的固定响应，不进入任何业务逻辑

use crate::infrastructure::http::error::ApiError;

/// 已注册路径上的不支持方法
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// 未注册路径
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
