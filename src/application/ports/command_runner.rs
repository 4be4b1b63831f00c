//! Command Runner Port - shell 命令执行抽象
//!
//! 定义"把一段文本交给平台 shell 执行并捕获 stdout"的接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 命令执行错误
///
/// 前三种表示命令已启动但没有成功结束，其余表示执行过程本身出错。
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Command '{command}' returned non-zero exit status {code}.")]
    NonZeroExit { command: String, code: i32 },

    #[error("Command '{command}' died with signal {signal}.")]
    Signaled { command: String, signal: i32 },

    #[error("Command '{command}' terminated without an exit status.")]
    Terminated { command: String },

    #[error("Failed to launch shell: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Command output is not valid UTF-8: {0}")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}

impl CommandError {
    /// 命令本身失败（非零退出、被信号终止），而不是执行环境出错
    pub fn is_execution_failure(&self) -> bool {
        matches!(
            self,
            CommandError::NonZeroExit { .. }
                | CommandError::Signaled { .. }
                | CommandError::Terminated { .. }
        )
    }
}

/// 命令执行结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// 标准输出（UTF-8 文本）
    pub stdout: String,
    /// 标准错误（仅用于日志，不返回给调用方）
    pub stderr: String,
}

/// Command Runner Port
///
/// 命令文本不做任何校验、转义或白名单过滤，原样交给 shell。
/// 调用会一直等待子进程退出，没有超时。
#[async_trait]
pub trait CommandRunnerPort: Send + Sync {
    /// 执行 shell 命令，退出码为 0 时返回捕获的输出
    async fn run(&self, command: &str) -> Result<CommandOutput, CommandError>;
}
