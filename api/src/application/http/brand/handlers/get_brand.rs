use axum::extract::{Path, State};
use carparts_core::domain::{catalog::Brand, search::ports::SearchService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetBrandResponse {
    pub data: Brand,
}

#[utoipa::path(
    get,
    path = "/{brand_id}",
    tag = "brand",
    summary = "Get brand",
    params(
        ("brand_id" = Uuid, Path, description = "Brand ID"),
    ),
    responses(
        (status = 200, body = GetBrandResponse),
        (status = 404, description = "Brand not found"),
    ),
)]
pub async fn get_brand(
    Path(brand_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetBrandResponse>, ApiError> {
    let brand = state
        .service
        .get_brand(brand_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetBrandResponse { data: brand }))
}
