//! Data HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ProcessData;
use crate::infrastructure::http::dto::ProcessDataResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::JsonPayload;
use crate::infrastructure::http::state::AppState;

/// `POST /data` - 处理载荷；带字符串 `command` 时交给 shell 执行
pub async fn process_data(
    State(state): State<Arc<AppState>>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<ProcessDataResponse>, ApiError> {
    let outcome = state
        .process_data_handler
        .handle(ProcessData { payload })
        .await?;

    Ok(Json(outcome.into()))
}
