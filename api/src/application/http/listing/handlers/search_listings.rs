use axum::extract::State;
use carparts_core::domain::{
    catalog::Listing,
    search::{ports::SearchService, value_objects::Page},
};

use crate::application::http::{
    query_extractor::QueryParamsExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "listing",
    summary = "Search listings",
    description = "Searches product listings. Only active listings are returned unless `status` is given. Accepts `q`, `sort` (or `sortBy`/`sortOrder`), `page`, `limit` and the filters `status`, `condition`, `minPrice`, `maxPrice`, `location`, `brandId`, `modelId`, `categoryId`, `userId`, plain or as `filter[field]`.",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive text matched against name and description"),
        ("sort" = Option<String>, Query, description = "Sort field, prefix with `-` for descending"),
        ("page" = Option<i64>, Query, description = "1-indexed page"),
        ("limit" = Option<i64>, Query, description = "Page size, 1 to 100"),
    ),
    responses(
        (status = 200, body = Page<Listing>),
        (status = 400, description = "Invalid filter, sort or price range"),
    ),
)]
pub async fn search_listings(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<Page<Listing>>, ApiError> {
    let page = state
        .service
        .search_listings(query_params.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
