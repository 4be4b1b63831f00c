//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：`/data` 载荷处理（可能执行 shell 命令）

mod data_commands;

pub mod handlers;

pub use data_commands::*;
