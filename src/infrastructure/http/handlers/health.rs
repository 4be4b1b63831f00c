//! Health Check Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GetHealth;
use crate::infrastructure::http::dto::HealthResponse;
use crate::infrastructure::http::state::AppState;

/// `GET /` - 健康检查
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(state.get_health_handler.handle(GetHealth).into())
}
