use carparts_core::domain::search::{
    entities::{FieldFilters, SortOrder},
    value_objects::SearchInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of an advanced listing search.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearchValidator {
    #[serde(default)]
    #[validate(length(max = 200, message = "searchTerm must be at most 200 characters"))]
    pub search_term: Option<String>,

    #[serde(default)]
    pub filters: FieldFilters,

    #[serde(default)]
    pub sort_by: Option<String>,

    #[serde(default)]
    pub sort_order: Option<SortOrder>,

    #[serde(default)]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<i64>,

    #[serde(default)]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

impl From<AdvancedSearchValidator> for SearchInput {
    fn from(payload: AdvancedSearchValidator) -> Self {
        SearchInput {
            search_term: payload.search_term,
            field_filters: payload.filters,
            sort_by: payload.sort_by,
            sort_order: payload.sort_order,
            page: payload.page,
            limit: payload.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use carparts_core::domain::search::entities::FilterValue;

    use super::*;

    #[test]
    fn test_advanced_search_body() {
        let payload: AdvancedSearchValidator = serde_json::from_str(
            r#"{
                "searchTerm": "brake",
                "filters": { "condition": "good", "maxPrice": 50 },
                "sortBy": "price_usd",
                "sortOrder": "asc",
                "limit": 10
            }"#,
        )
        .unwrap();
        assert!(payload.validate().is_ok());

        let input = SearchInput::from(payload);
        assert_eq!(input.field_filters["maxPrice"], FilterValue::Number(50.0));
        assert_eq!(input.sort_order, Some(SortOrder::Asc));
        assert_eq!(input.page, None);
    }

    #[test]
    fn test_advanced_search_rejects_out_of_range_paging() {
        let payload: AdvancedSearchValidator =
            serde_json::from_str(r#"{ "page": 0, "limit": 500 }"#).unwrap();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("page"));
        assert!(errors.field_errors().contains_key("limit"));
    }

    #[test]
    fn test_advanced_search_rejects_unknown_sort_order() {
        let result = serde_json::from_str::<AdvancedSearchValidator>(r#"{ "sortOrder": "sideways" }"#);
        assert!(result.is_err());
    }
}
