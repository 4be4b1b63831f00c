//! Payload Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("request body is empty")]
    Empty,

    #[error("malformed JSON: {0}")]
    Malformed(String),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}
