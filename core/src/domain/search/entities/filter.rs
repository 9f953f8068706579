use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::errors::SearchError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Listing,
    Part,
    Brand,
    Model,
    Category,
}

impl EntityType {
    pub const ALL: [EntityType; 5] = [
        EntityType::Listing,
        EntityType::Part,
        EntityType::Brand,
        EntityType::Model,
        EntityType::Category,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Listing => "listing",
            EntityType::Part => "part",
            EntityType::Brand => "brand",
            EntityType::Model => "model",
            EntityType::Category => "category",
        }
    }
}

impl FromStr for EntityType {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .into_iter()
            .find(|entity_type| entity_type.as_str() == s)
            .ok_or_else(|| SearchError::Configuration(format!("unknown entity type '{s}'")))
    }
}

impl Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

/// Raw value of a field filter, before it is coerced to the column's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FilterValue {
    Number(f64),
    Text(String),
}

impl FilterValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            FilterValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
        .filter(|n| n.is_finite())
    }

    pub fn as_text(&self) -> String {
        match self {
            FilterValue::Number(n) => n.to_string(),
            FilterValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value as f64)
    }
}

impl From<Uuid> for FilterValue {
    fn from(value: Uuid) -> Self {
        FilterValue::Text(value.to_string())
    }
}

/// Field filters keyed by filter name. Iteration order never decides clause
/// order; the schema descriptor does.
pub type FieldFilters = BTreeMap<String, FilterValue>;

/// Structured input of the search query builder.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterRequest {
    pub entity_type: EntityType,
    pub search_term: Option<String>,
    pub field_filters: FieldFilters,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl FilterRequest {
    pub fn new(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            search_term: None,
            field_filters: FieldFilters::new(),
            sort_by: None,
            sort_order: None,
            page: None,
            limit: None,
        }
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.field_filters.insert(key.into(), value.into());
        self
    }

    pub fn with_sort(mut self, sort_by: impl Into<String>, sort_order: SortOrder) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_order = Some(sort_order);
        self
    }

    pub fn with_page(mut self, page: i64, limit: i64) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_parse() {
        assert_eq!("listing".parse::<EntityType>(), Ok(EntityType::Listing));
        assert_eq!("category".parse::<EntityType>(), Ok(EntityType::Category));
        assert!(matches!(
            "users".parse::<EntityType>(),
            Err(SearchError::Configuration(_))
        ));
    }

    #[test]
    fn test_filter_value_coercion() {
        assert_eq!(FilterValue::from("49.99").as_number(), Some(49.99));
        assert_eq!(FilterValue::from(50.0).as_number(), Some(50.0));
        assert_eq!(FilterValue::from("fifty").as_number(), None);
        assert_eq!(FilterValue::from("NaN").as_number(), None);
        assert_eq!(FilterValue::from(12_i64).as_text(), "12");
    }

    #[test]
    fn test_filter_value_deserialize_untagged() {
        let filters: FieldFilters =
            serde_json::from_str(r#"{"maxPrice": 50, "condition": "good"}"#).unwrap();
        assert_eq!(filters["maxPrice"], FilterValue::Number(50.0));
        assert_eq!(filters["condition"], FilterValue::Text("good".to_string()));
    }
}
