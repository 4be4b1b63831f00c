//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::CommandError;
use crate::domain::PayloadError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 请求体缺失、不是合法 JSON，或不是 JSON 对象
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] PayloadError),

    /// shell 命令已执行但失败
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<CommandError> for ApplicationError {
    fn from(err: CommandError) -> Self {
        if err.is_execution_failure() {
            ApplicationError::CommandFailed(err.to_string())
        } else {
            ApplicationError::InternalError(err.to_string())
        }
    }
}
