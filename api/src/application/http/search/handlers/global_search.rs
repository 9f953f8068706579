use axum::extract::State;
use carparts_core::domain::search::{ports::SearchService, value_objects::GlobalSearchResults};

use crate::application::http::{
    query_builder::global_search_input,
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "search",
    summary = "Global search",
    description = "Searches listings, parts, brands, models and categories at once. With `type=all` listings and parts are paged and the five best brand, model and category matches are included. Filters apply to every searched entity that supports them.",
    params(
        ("q" = String, Query, description = "Search term, required"),
        ("type" = Option<String>, Query, description = "all, listings, parts, brands, models or categories"),
        ("page" = Option<i64>, Query, description = "1-indexed page"),
        ("limit" = Option<i64>, Query, description = "Page size, 1 to 100"),
    ),
    responses(
        (status = 200, body = GlobalSearchResults),
        (status = 400, description = "Missing search term, invalid type or filter"),
    ),
)]
pub async fn global_search(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<GlobalSearchResults>, ApiError> {
    let input = global_search_input(query_params)?;

    let results = state
        .service
        .global_search(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(results))
}
