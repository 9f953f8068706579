use axum::extract::{Path, State};
use carparts_core::domain::search::{ports::SearchService, value_objects::CompatibleModels};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCompatibleModelsResponse {
    pub data: CompatibleModels,
}

#[utoipa::path(
    get,
    path = "/{part_id}/models",
    tag = "part",
    summary = "Get compatible models",
    description = "Lists the car models a part fits, ordered by brand and model name.",
    params(
        ("part_id" = Uuid, Path, description = "Part ID"),
    ),
    responses(
        (status = 200, body = GetCompatibleModelsResponse),
        (status = 404, description = "Part not found"),
    ),
)]
pub async fn get_compatible_models(
    Path(part_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetCompatibleModelsResponse>, ApiError> {
    let compatible = state
        .service
        .get_compatible_models(part_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCompatibleModelsResponse { data: compatible }))
}
