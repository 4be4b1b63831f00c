//! Request Extractors

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};

use crate::application::ApplicationError;
use crate::domain::DataPayload;

use super::error::ApiError;

/// `/data` 请求载荷
///
/// 忽略 `Content-Type`，直接把请求体按 JSON 解析。
#[derive(Debug)]
pub struct JsonPayload(pub DataPayload);

#[async_trait]
impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::Internal(e.body_text()))?;

        DataPayload::parse(&body)
            .map(JsonPayload)
            .map_err(|e| ApiError::from(ApplicationError::from(e)))
    }
}
