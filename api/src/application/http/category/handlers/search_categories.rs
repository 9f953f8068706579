use axum::extract::State;
use carparts_core::domain::{
    catalog::Category,
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
    tag = "category",
    summary = "Search categories",
    description = "Searches part categories by name. Sort keys: `createdDate`, `name`.",
    params(
        ("q" = Option<String>, Query, description = "Case-insensitive text matched against the name"),
        ("sort" = Option<String>, Query, description = "Sort field, prefix with `-` for descending"),
        ("page" = Option<i64>, Query, description = "1-indexed page"),
        ("limit" = Option<i64>, Query, description = "Page size, 1 to 100"),
    ),
    responses(
        (status = 200, body = Page<Category>),
        (status = 400, description = "Invalid filter or sort"),
    ),
)]
pub async fn search_categories(
    State(state): State<AppState>,
    QueryParamsExtractor(query_params): QueryParamsExtractor,
) -> Result<Response<Page<Category>>, ApiError> {
    let page = state
        .service
        .search_categories(query_params.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
