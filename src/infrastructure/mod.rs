//! Infrastructure Layer - 基础设施层
//!
//! 提供端口的具体实现和 HTTP 接入层

pub mod adapters;
pub mod http;

pub use adapters::ShellCommandRunner;
