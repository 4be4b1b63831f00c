//! Data Commands

use crate::domain::DataPayload;

/// 处理 `/data` 载荷命令
#[derive(Debug, Clone)]
pub struct ProcessData {
    pub payload: DataPayload,
}
