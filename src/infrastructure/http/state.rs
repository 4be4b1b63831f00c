//! Application State
//!
//! 请求之间只共享不可变的 handler

use std::sync::Arc;

use crate::application::{CommandRunnerPort, GetHealthHandler, ProcessDataHandler};

/// 应用状态
pub struct AppState {
    pub process_data_handler: ProcessDataHandler,
    pub get_health_handler: GetHealthHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(runner: Arc<dyn CommandRunnerPort>, service_name: impl Into<String>) -> Self {
        Self {
            process_data_handler: ProcessDataHandler::new(runner),
            get_health_handler: GetHealthHandler::new(service_name),
        }
    }
}
