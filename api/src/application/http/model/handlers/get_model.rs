use axum::extract::{Path, State};
use carparts_core::domain::{catalog::Model, search::ports::SearchService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetModelResponse {
    pub data: Model,
}

#[utoipa::path(
    get,
    path = "/{model_id}",
    tag = "model",
    summary = "Get model",
    description = "Retrieves a car model with its brand name and year range.",
    params(
        ("model_id" = Uuid, Path, description = "Model ID"),
    ),
    responses(
        (status = 200, body = GetModelResponse),
        (status = 404, description = "Model not found"),
    ),
)]
pub async fn get_model(
    Path(model_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetModelResponse>, ApiError> {
    let model = state
        .service
        .get_model(model_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetModelResponse { data: model }))
}
