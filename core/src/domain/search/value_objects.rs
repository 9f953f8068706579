use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::catalog::{Brand, Category, Condition, Listing, Model, Part};
use crate::domain::search::entities::{EntityType, FieldFilters, FilterRequest, SortOrder};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

/// 1-indexed page window. Out-of-range values are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE).max(1),
            limit: limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination envelope returned by every search.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: i64, limit: i64, total: i64) -> Self {
        Self {
            items,
            page,
            limit,
            total,
            pages: page_count(total, limit),
        }
    }
}

pub fn page_count(total: i64, limit: i64) -> i64 {
    if limit <= 0 || total <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// Filter request without an entity type, as received from a search
/// endpoint that already knows what it is searching.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchInput {
    pub search_term: Option<String>,
    pub field_filters: FieldFilters,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl SearchInput {
    pub fn into_request(self, entity_type: EntityType) -> FilterRequest {
        FilterRequest {
            entity_type,
            search_term: self.search_term,
            field_filters: self.field_filters,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    #[default]
    All,
    Listings,
    Parts,
    Brands,
    Models,
    Categories,
}

impl SearchScope {
    pub fn includes(&self, entity_type: EntityType) -> bool {
        match self {
            SearchScope::All => true,
            SearchScope::Listings => entity_type == EntityType::Listing,
            SearchScope::Parts => entity_type == EntityType::Part,
            SearchScope::Brands => entity_type == EntityType::Brand,
            SearchScope::Models => entity_type == EntityType::Model,
            SearchScope::Categories => entity_type == EntityType::Category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobalSearchInput {
    pub search_term: Option<String>,
    pub scope: SearchScope,
    pub field_filters: FieldFilters,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GlobalSearchPagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GlobalSearchResults {
    pub search_term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listings: Option<Vec<Listing>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<Brand>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<Model>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    pub pagination: GlobalSearchPagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Brand,
    Model,
    Category,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub display: String,
}

impl From<Brand> for Suggestion {
    fn from(brand: Brand) -> Self {
        Self {
            kind: SuggestionKind::Brand,
            id: brand.id,
            display: brand.name.clone(),
            name: brand.name,
            brand: None,
        }
    }
}

impl From<Model> for Suggestion {
    fn from(model: Model) -> Self {
        let display = match &model.brand_name {
            Some(brand) => format!("{} {}", brand, model.name),
            None => model.name.clone(),
        };
        Self {
            kind: SuggestionKind::Model,
            id: model.id,
            name: model.name,
            brand: model.brand_name,
            display,
        }
    }
}

impl From<Category> for Suggestion {
    fn from(category: Category) -> Self {
        Self {
            kind: SuggestionKind::Category,
            id: category.id,
            display: category.name.clone(),
            name: category.name,
            brand: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ConditionCount {
    pub value: Condition,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FilterOptions {
    pub brands: Vec<Brand>,
    pub categories: Vec<Category>,
    pub conditions: Vec<ConditionCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CompatibleModels {
    pub part: Part,
    pub models: Vec<Model>,
}
