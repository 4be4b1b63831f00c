//! HTTP Error Handling
//!
//! 所有错误到 HTTP 状态码 + JSON 响应体的唯一转换点

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 错误消息
pub mod messages {
    pub const NO_JSON_DATA: &str = "No JSON data provided";
    pub const COMMAND_FAILED: &str = "Command execution failed";
    pub const INTERNAL_ERROR: &str = "Internal server error";
    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
    pub const METHOD_NOT_ALLOWED_HINT: &str = "Check the HTTP method and endpoint";
    pub const NOT_FOUND: &str = "Endpoint not found";
    pub const NOT_FOUND_HINT: &str = "Available endpoints: / (GET), /data (POST)";
}

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &'static str) -> Self {
        Self {
            error,
            message: None,
            details: None,
        }
    }

    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 请求体缺失或不是 JSON 对象
    NoJsonData,
    /// shell 命令执行失败
    CommandFailed(String),
    /// 其他未分类错误
    Internal(String),
    /// 路径存在但方法不支持
    MethodNotAllowed,
    /// 路径不存在
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoJsonData => StatusCode::BAD_REQUEST,
            ApiError::CommandFailed(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = match self {
            ApiError::NoJsonData => {
                tracing::warn!(status = status.as_u16(), "No JSON data provided");
                ErrorResponse::new(messages::NO_JSON_DATA)
            }
            ApiError::CommandFailed(details) => {
                tracing::error!(status = status.as_u16(), details = %details, "Command execution failed");
                ErrorResponse::new(messages::COMMAND_FAILED).with_details(details)
            }
            ApiError::Internal(details) => {
                tracing::error!(status = status.as_u16(), details = %details, "Internal server error");
                ErrorResponse::new(messages::INTERNAL_ERROR).with_details(details)
            }
            ApiError::MethodNotAllowed => ErrorResponse::new(messages::METHOD_NOT_ALLOWED)
                .with_message(messages::METHOD_NOT_ALLOWED_HINT),
            ApiError::NotFound => {
                ErrorResponse::new(messages::NOT_FOUND).with_message(messages::NOT_FOUND_HINT)
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::InvalidPayload(reason) => {
                tracing::debug!(reason = %reason, "Rejected request payload");
                ApiError::NoJsonData
            }
            ApplicationError::CommandFailed(details) => ApiError::CommandFailed(details),
            ApplicationError::InternalError(details) => ApiError::Internal(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body_shapes() {
        let body = serde_json::to_value(ErrorResponse::new(messages::NO_JSON_DATA)).unwrap();
        assert_eq!(body, json!({"error": "No JSON data provided"}));

        let body = serde_json::to_value(
            ErrorResponse::new(messages::COMMAND_FAILED).with_details("exit 1"),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({"error": "Command execution failed", "details": "exit 1"})
        );

        let body = serde_json::to_value(
            ErrorResponse::new(messages::NOT_FOUND).with_message(messages::NOT_FOUND_HINT),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({
                "error": "Endpoint not found",
                "message": "Available endpoints: / (GET), /data (POST)"
            })
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NoJsonData.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::CommandFailed(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_application_error_mapping() {
        let err = ApiError::from(ApplicationError::InvalidPayload(
            crate::domain::PayloadError::Empty,
        ));
        assert!(matches!(err, ApiError::NoJsonData));

        let err = ApiError::from(ApplicationError::CommandFailed("boom".to_string()));
        assert!(matches!(err, ApiError::CommandFailed(ref d) if d == "boom"));

        let err = ApiError::from(ApplicationError::internal("oops"));
        assert!(matches!(err, ApiError::Internal(ref d) if d == "oops"));
    }
}
