use axum::extract::{Query, State};
use carparts_core::domain::search::{ports::SearchService, value_objects::Suggestion};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::{
    query_builder::parse_scope,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetSuggestionsQuery {
    /// Partial input, at least two characters
    pub q: Option<String>,
    /// all, brands, models or categories
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

#[utoipa::path(
    get,
    path = "/suggestions",
    tag = "search",
    summary = "Search suggestions",
    description = "Autocomplete over brand, model and category names. At most ten suggestions are returned.",
    params(GetSuggestionsQuery),
    responses(
        (status = 200, body = GetSuggestionsResponse),
        (status = 400, description = "Invalid type"),
    ),
)]
pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(query): Query<GetSuggestionsQuery>,
) -> Result<Response<GetSuggestionsResponse>, ApiError> {
    let scope = match query.kind.as_deref() {
        Some(kind) => parse_scope(kind)?,
        None => Default::default(),
    };

    let suggestions = state
        .service
        .suggestions(query.q.unwrap_or_default(), scope)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSuggestionsResponse { suggestions }))
}
