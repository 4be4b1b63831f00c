//! Datatap - 带健康检查和数据处理接口的最小 JSON HTTP 服务
//!
//! `POST /data` 会把载荷中的 `command` 字符串原样交给平台 shell 执行，
//! 不做任何校验或转义。这是一个刻意保留的命令注入演示目标，
//! 不要部署在可信网络之外。
//!
//! 领域层 (domain/):
//! - Payload Context: 无模式 JSON 载荷与 `command` 字段
//!
//! 应用层 (application/):
//! - Ports: CommandRunner
//! - Commands: ProcessData
//! - Queries: GetHealth
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 路由表、处理器、错误转换、中间件、服务器
//! - Adapters: Shell Command Runner

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
