use axum::extract::State;
use carparts_core::domain::search::{ports::SearchService, value_objects::FilterOptions};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/filters",
    tag = "search",
    summary = "Search filter options",
    description = "Brands and categories available as filters, with the number of active listings per condition.",
    responses(
        (status = 200, body = FilterOptions),
    ),
)]
pub async fn get_filter_options(
    State(state): State<AppState>,
) -> Result<Response<FilterOptions>, ApiError> {
    let options = state
        .service
        .filter_options()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(options))
}
