//! Data Command Handlers

use chrono::Local;
use std::sync::Arc;

use crate::application::commands::ProcessData;
use crate::application::error::ApplicationError;
use crate::application::ports::CommandRunnerPort;
use crate::domain::payload::json_kind;
use crate::domain::{CommandField, DataPayload};

/// 时间戳格式：`2024-05-01 13:45:12.123456`（本地时间）
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

// ============================================================================
// ProcessData
// ============================================================================

/// ProcessData 结果
#[derive(Debug, Clone)]
pub enum ProcessDataOutcome {
    /// 执行了 `command` 且退出码为 0
    Executed { output: String, input: DataPayload },
    /// 没有 `command`，按普通数据处理
    Processed {
        received: DataPayload,
        timestamp: String,
    },
}

/// ProcessData Handler
pub struct ProcessDataHandler {
    runner: Arc<dyn CommandRunnerPort>,
}

impl ProcessDataHandler {
    pub fn new(runner: Arc<dyn CommandRunnerPort>) -> Self {
        Self { runner }
    }

    pub async fn handle(&self, command: ProcessData) -> Result<ProcessDataOutcome, ApplicationError> {
        let payload = command.payload;

        match payload.command() {
            CommandField::Shell(shell_command) => {
                tracing::warn!(
                    command = %shell_command,
                    "Executing shell command from request payload"
                );

                let output = self.runner.run(shell_command).await.map_err(|e| {
                    tracing::warn!(command = %shell_command, error = %e, "Shell command failed");
                    ApplicationError::from(e)
                })?;

                if !output.stderr.is_empty() {
                    tracing::debug!(stderr = %output.stderr, "Shell command wrote to stderr");
                }

                tracing::info!(
                    stdout_len = output.stdout.len(),
                    "Shell command executed"
                );

                Ok(ProcessDataOutcome::Executed {
                    output: output.stdout,
                    input: payload,
                })
            }
            CommandField::Unsupported(value) => Err(ApplicationError::internal(format!(
                "command must be a string, not {}",
                json_kind(value)
            ))),
            CommandField::Absent => {
                tracing::debug!(fields = payload.len(), "Payload processed");

                Ok(ProcessDataOutcome::Processed {
                    received: payload,
                    timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
                })
            }
        }
    }
}
