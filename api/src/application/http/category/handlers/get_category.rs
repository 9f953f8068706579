use axum::extract::{Path, State};
use carparts_core::domain::{catalog::Category, search::ports::SearchService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCategoryResponse {
    pub data: Category,
}

#[utoipa::path(
    get,
    path = "/{category_id}",
    tag = "category",
    summary = "Get category",
    params(
        ("category_id" = Uuid, Path, description = "Category ID"),
    ),
    responses(
        (status = 200, body = GetCategoryResponse),
        (status = 404, description = "Category not found"),
    ),
)]
pub async fn get_category(
    Path(category_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetCategoryResponse>, ApiError> {
    let category = state
        .service
        .get_category(category_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCategoryResponse { data: category }))
}
