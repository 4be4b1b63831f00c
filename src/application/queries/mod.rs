//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：健康检查

mod health_queries;

pub mod handlers;

pub use health_queries::*;
