//! Payload Context - Value Objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::PayloadError;

/// 触发 shell 执行的字段名
pub const COMMAND_KEY: &str = "command";

/// `/data` 请求载荷：任意键值的 JSON 对象，不做模式校验
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataPayload(Map<String, Value>);

/// `command` 字段的分类结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandField<'a> {
    /// 没有 `command` 键
    Absent,
    /// 字符串命令，原样交给 shell
    Shell(&'a str),
    /// 有 `command` 键但不是字符串
    Unsupported(&'a Value),
}

impl DataPayload {
    /// 解析原始请求体
    ///
    /// 空白请求体、非法 JSON、以及非对象的 JSON 值都视为没有载荷。
    pub fn parse(body: &[u8]) -> Result<Self, PayloadError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(PayloadError::Empty);
        }

        let value: Value =
            serde_json::from_slice(body).map_err(|e| PayloadError::Malformed(e.to_string()))?;

        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(PayloadError::NotAnObject(json_kind(&other))),
        }
    }

    pub fn command(&self) -> CommandField<'_> {
        match self.0.get(COMMAND_KEY) {
            None => CommandField::Absent,
            Some(Value::String(command)) => CommandField::Shell(command),
            Some(other) => CommandField::Unsupported(other),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<DataPayload> for Value {
    fn from(payload: DataPayload) -> Self {
        Value::Object(payload.0)
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
