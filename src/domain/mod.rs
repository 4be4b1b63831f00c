//! Domain Layer - 领域层
//!
//! 只有一个上下文:
//! - Payload Context: `/data` 请求载荷及其 `command` 字段

pub mod payload;

pub use payload::{CommandField, DataPayload, PayloadError};
