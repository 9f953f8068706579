use axum::extract::{Path, State};
use carparts_core::domain::{catalog::Listing, search::ports::SearchService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetListingResponse {
    pub data: Listing,
}

#[utoipa::path(
    get,
    path = "/{listing_id}",
    tag = "listing",
    summary = "Get listing",
    description = "Retrieves a listing with its seller, part, category, brand and model names.",
    params(
        ("listing_id" = Uuid, Path, description = "Listing ID"),
    ),
    responses(
        (status = 200, body = GetListingResponse),
        (status = 404, description = "Listing not found"),
    ),
)]
pub async fn get_listing(
    Path(listing_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetListingResponse>, ApiError> {
    let listing = state
        .service
        .get_listing(listing_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetListingResponse { data: listing }))
}
