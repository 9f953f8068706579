use std::collections::HashMap;
use std::str::FromStr;

use carparts_core::domain::search::entities::{FieldFilters, FilterValue, SortOrder};

use crate::application::http::server::api_entities::api_error::ApiError;

/// Filter operator of a bracketed `filter[field][op]` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Gte,
    Lte,
}

impl FromStr for FilterOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "gte" => Ok(FilterOperator::Gte),
            "lte" => Ok(FilterOperator::Lte),
            _ => Err(()),
        }
    }
}

/// Maps a bracketed filter onto the flat filter key it stands for.
///
/// `price` ranges become `minPrice`/`maxPrice`. Any other operator is
/// kept verbatim in the key, so the search layer rejects it as unknown.
fn filter_key(field: &str, operator: Option<&str>) -> String {
    match (field, operator.map(|op| op.parse::<FilterOperator>())) {
        (_, None) | (_, Some(Ok(FilterOperator::Eq))) => field.to_string(),
        ("price", Some(Ok(FilterOperator::Gte))) => "minPrice".to_string(),
        ("price", Some(Ok(FilterOperator::Lte))) => "maxPrice".to_string(),
        (_, Some(_)) => format!("{}[{}]", field, operator.unwrap_or_default()),
    }
}

/// Parsed sort parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub order: Option<SortOrder>,
}

impl SortSpec {
    /// Parses `field` or `-field`. Only the first entry of a comma list is
    /// honoured, searches order by a single column.
    pub fn from_string(s: &str) -> Option<Self> {
        let first = s.split(',').map(str::trim).find(|part| !part.is_empty())?;

        match first.strip_prefix('-') {
            Some(stripped) => Some(SortSpec {
                field: stripped.to_string(),
                order: Some(SortOrder::Desc),
            }),
            None => Some(SortSpec {
                field: first.to_string(),
                order: Some(SortOrder::Asc),
            }),
        }
    }
}

/// Search parameters of a GET search route. Keys other than the search
/// term, sort and pagination keys are field filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub search_term: Option<String>,
    pub filters: FieldFilters,
    pub sort: Option<SortSpec>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl QueryParams {
    /// Parse from query string map
    /// Handles formats like:
    /// - q=brake (or search=brake)
    /// - condition=good or filter[condition]=good
    /// - filter[price][gte]=10, filter[price][lte]=50
    /// - sort=-price, or sortBy=price&sortOrder=asc
    /// - page=2, limit=20
    ///
    /// A `sortOrder` other than `asc`/`desc` is rejected.
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Result<Self, ApiError> {
        let mut params = QueryParams::default();
        let mut sort_by: Option<String> = None;
        let mut sort_order: Option<SortOrder> = None;

        for (key, value) in query_map {
            if let Some(bracketed) = key.strip_prefix("filter[") {
                let Some(end_bracket) = bracketed.find(']') else {
                    params.insert_filter(key.clone(), value);
                    continue;
                };
                let field = &bracketed[..end_bracket];
                let remaining = &bracketed[end_bracket + 1..];

                let key = if remaining.is_empty() {
                    filter_key(field, None)
                } else if remaining.starts_with('[') && remaining.ends_with(']') {
                    filter_key(field, Some(&remaining[1..remaining.len() - 1]))
                } else {
                    key.clone()
                };
                params.insert_filter(key, value);
                continue;
            }

            match key.as_str() {
                "q" | "search" => {
                    if params.search_term.is_none() || key == "q" {
                        params.search_term = Some(value.clone());
                    }
                }
                "sort" => {
                    if let Some(spec) = SortSpec::from_string(value) {
                        params.sort = Some(spec);
                    }
                }
                "sortBy" => sort_by = Some(value.trim().to_string()).filter(|v| !v.is_empty()),
                "sortOrder" => {
                    let order = value.trim();
                    if !order.is_empty() {
                        sort_order = Some(order.parse::<SortOrder>().map_err(|_| {
                            ApiError::BadRequest(format!(
                                "Invalid sort order '{order}': expected asc or desc"
                            ))
                        })?);
                    }
                }
                "page" => params.page = value.trim().parse::<i64>().ok(),
                "limit" => params.limit = value.trim().parse::<i64>().ok(),
                _ => params.insert_filter(key.clone(), value),
            }
        }

        if params.sort.is_none()
            && let Some(field) = sort_by
        {
            params.sort = Some(SortSpec {
                field,
                order: sort_order,
            });
        }

        Ok(params)
    }

    fn insert_filter(&mut self, key: String, value: &str) {
        self.filters.insert(key, FilterValue::Text(value.to_string()));
    }
}

/// Helper trait for deserializing query parameters with filter/sort support
pub trait QueryParamsExt {
    fn parse_query_params(&self) -> Result<QueryParams, ApiError>;
}

impl QueryParamsExt for HashMap<String, String> {
    fn parse_query_params(&self) -> Result<QueryParams, ApiError> {
        QueryParams::from_query_map(self)
    }
}
