use axum::extract::State;
use carparts_core::domain::health::ports::HealthCheckService;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LiveResponse {
    pub status: String,
    pub response_time_ms: u64,
    pub checked_at: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LiveResponse),
        (status = 503, description = "Database unreachable"),
    ),
)]
pub async fn live(State(state): State<AppState>) -> Result<Response<LiveResponse>, ApiError> {
    let response_time_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(LiveResponse {
        status: "ok".to_string(),
        response_time_ms,
        checked_at: Utc::now(),
    }))
}
