//! Data Transfer Objects

use serde::Serialize;

use crate::application::{HealthReport, ProcessDataOutcome};
use crate::domain::DataPayload;

/// 命令执行成功时的固定消息
pub const COMMAND_SUCCESS_MESSAGE: &str = "Command executed successfully";

// ============================================================================
// Health
// ============================================================================

/// `GET /` 响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
    pub version: &'static str,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            status: report.status,
            message: report.message,
            version: report.version,
        }
    }
}

// ============================================================================
// Data
// ============================================================================

/// `POST /data` 成功响应，两种形状
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProcessDataResponse {
    Executed {
        message: &'static str,
        output: String,
        input_data: DataPayload,
    },
    Processed {
        received: DataPayload,
        processed: bool,
        timestamp: String,
    },
}

impl From<ProcessDataOutcome> for ProcessDataResponse {
    fn from(outcome: ProcessDataOutcome) -> Self {
        match outcome {
            ProcessDataOutcome::Executed { output, input } => ProcessDataResponse::Executed {
                message: COMMAND_SUCCESS_MESSAGE,
                output,
                input_data: input,
            },
            ProcessDataOutcome::Processed {
                received,
                timestamp,
            } => ProcessDataResponse::Processed {
                received,
                processed: true,
                timestamp,
            },
        }
    }
}
