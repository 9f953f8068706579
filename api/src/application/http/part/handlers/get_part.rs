use axum::extract::{Path, State};
use carparts_core::domain::{catalog::Part, search::ports::SearchService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPartResponse {
    pub data: Part,
}

#[utoipa::path(
    get,
    path = "/{part_id}",
    tag = "part",
    summary = "Get part",
    params(
        ("part_id" = Uuid, Path, description = "Part ID"),
    ),
    responses(
        (status = 200, body = GetPartResponse),
        (status = 404, description = "Part not found"),
    ),
)]
pub async fn get_part(
    Path(part_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetPartResponse>, ApiError> {
    let part = state
        .service
        .get_part(part_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetPartResponse { data: part }))
}
