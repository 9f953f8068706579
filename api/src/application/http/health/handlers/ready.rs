use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use carparts_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Checks the database connection. Responds 503 with the same body when it is down.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = DatabaseHealthStatus),
    ),
)]
pub async fn ready(State(state): State<AppState>) -> Result<Response, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    let code = if status.is_up() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((code, Json(status)).into_response())
}
