use axum::extract::State;
use carparts_core::domain::{
    catalog::Listing,
    search::{ports::SearchService, value_objects::Page},
};

use crate::application::http::{
    search::validators::AdvancedSearchValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/advanced",
    tag = "search",
    summary = "Advanced listing search",
    description = "Searches listings with a JSON body carrying the search term, filters, sort and pagination.",
    request_body = AdvancedSearchValidator,
    responses(
        (status = 200, body = Page<Listing>),
        (status = 400, description = "Invalid body, filter, sort or price range"),
    ),
)]
pub async fn advanced_search(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<AdvancedSearchValidator>,
) -> Result<Response<Page<Listing>>, ApiError> {
    let page = state
        .service
        .search_listings(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
