//! Payload Context - 请求载荷
//!
//! 职责:
//! - 将原始请求体解析为无模式的 JSON 对象
//! - 识别 `command` 字段

mod errors;
mod value_objects;

pub use errors::PayloadError;
pub use value_objects::{CommandField, DataPayload, COMMAND_KEY};
pub(crate) use value_objects::json_kind;
