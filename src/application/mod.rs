//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（CommandRunner）
//! - commands: CQRS 命令及处理器（ProcessData）
//! - queries: CQRS 查询及处理器（GetHealth）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{ProcessDataHandler, ProcessDataOutcome},
    ProcessData,
};

pub use error::ApplicationError;

pub use ports::{CommandError, CommandOutput, CommandRunnerPort};

pub use queries::{
    handlers::{GetHealthHandler, HealthReport, SERVICE_VERSION},
    GetHealth,
};
