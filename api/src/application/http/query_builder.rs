//! Conversions from parsed query parameters into search service inputs.

use carparts_core::domain::search::value_objects::{GlobalSearchInput, SearchInput, SearchScope};

use super::query_params::QueryParams;
use crate::application::http::server::api_entities::api_error::ApiError;

/// Query key selecting the entities of a global search.
pub const SCOPE_KEY: &str = "type";

impl From<QueryParams> for SearchInput {
    fn from(params: QueryParams) -> Self {
        let (sort_by, sort_order) = match params.sort {
            Some(spec) => (Some(spec.field), spec.order),
            None => (None, None),
        };

        SearchInput {
            search_term: params.search_term,
            field_filters: params.filters,
            sort_by,
            sort_order,
            page: params.page,
            limit: params.limit,
        }
    }
}

/// Takes the `type` key out of the filters and parses it as a scope.
pub fn take_scope(params: &mut QueryParams) -> Result<SearchScope, ApiError> {
    match params.filters.remove(SCOPE_KEY) {
        None => Ok(SearchScope::default()),
        Some(value) => parse_scope(&value.as_text()),
    }
}

pub fn parse_scope(value: &str) -> Result<SearchScope, ApiError> {
    serde_json::from_value::<SearchScope>(serde_json::Value::String(value.trim().to_lowercase()))
        .map_err(|_| {
            ApiError::BadRequest(format!(
                "Invalid search type '{value}', expected one of: all, listings, parts, brands, models, categories"
            ))
        })
}

pub fn global_search_input(mut params: QueryParams) -> Result<GlobalSearchInput, ApiError> {
    let scope = take_scope(&mut params)?;

    Ok(GlobalSearchInput {
        search_term: params.search_term,
        scope,
        field_filters: params.filters,
        page: params.page,
        limit: params.limit,
    })
}
