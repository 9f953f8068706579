//! Filtered-search query builder.
//!
//! Turns a [`FilterRequest`] into a parameterized data query and a count
//! query with identical WHERE semantics. User-supplied values only ever
//! reach the database as bind parameters; the SQL text is assembled solely
//! from the schema descriptor tables.

use sea_orm::Value;
use uuid::Uuid;

use crate::domain::catalog::{Condition, ListingStatus};
use crate::domain::search::{
    entities::{EntityType, FilterRequest, FilterValue, SearchError, SearchQuery},
    schema::{
        Comparison, FilterColumn, MARKETPLACE_SCHEMA, SchemaDescriptor, ValueKind, descriptor_for,
    },
    value_objects::Pagination,
};

#[derive(Debug, Clone, Copy)]
pub struct SearchQueryBuilder<'s> {
    schema: &'s [SchemaDescriptor],
}

impl Default for SearchQueryBuilder<'static> {
    fn default() -> Self {
        Self::new(MARKETPLACE_SCHEMA)
    }
}

impl<'s> SearchQueryBuilder<'s> {
    pub const fn new(schema: &'s [SchemaDescriptor]) -> Self {
        Self { schema }
    }

    pub fn descriptor(&self, entity_type: EntityType) -> Result<&'s SchemaDescriptor, SearchError> {
        descriptor_for(self.schema, entity_type)
    }

    pub fn build(&self, request: &FilterRequest) -> Result<SearchQuery, SearchError> {
        let descriptor = self.descriptor(request.entity_type)?;

        for key in request.field_filters.keys() {
            if descriptor.filter(key).is_none() {
                return Err(SearchError::invalid_filter(
                    key,
                    format!("not a filter of {}", descriptor.entity_type),
                ));
            }
        }

        let sort_key = request
            .sort_by
            .as_deref()
            .unwrap_or(descriptor.default_sort);
        let sort_column =
            descriptor
                .sort_column(sort_key)
                .ok_or_else(|| SearchError::InvalidSort {
                    field: sort_key.to_string(),
                    allowed: descriptor.allowed_sort_keys(),
                })?;
        let direction = request.sort_order.unwrap_or_default().as_sql();
        let pagination = Pagination::new(request.page, request.limit);

        let mut conditions = Conditions::default();

        if let Some(visibility) = descriptor.default_visibility
            && !request.field_filters.contains_key(visibility.key)
        {
            conditions.push_literal(visibility.clause);
        }

        for column in descriptor.filters {
            if let Some(value) = request.field_filters.get(column.key) {
                let bound = bind_value(column, value)?;
                conditions.push_comparison(column, bound);
            }
        }

        check_ranges(descriptor, request)?;

        if let Some(term) = normalize_search_term(request.search_term.as_deref()) {
            conditions.push_search(descriptor.search_columns, &term);
        }

        let from = descriptor.from_clause();
        let where_clause = conditions.where_clause();

        let count_sql = format!("SELECT COUNT(*) AS count FROM {from}{where_clause}");
        let count_params = conditions.params.clone();

        let mut params = conditions.params;
        let limit_index = params.len() + 1;
        params.push(pagination.limit.into());
        params.push(pagination.offset().into());

        let sql = format!(
            "SELECT {} FROM {from}{where_clause} ORDER BY {sort_column} {direction}, {}.id {direction} LIMIT ${} OFFSET ${}",
            descriptor.projection,
            descriptor.alias,
            limit_index,
            limit_index + 1,
        );

        Ok(SearchQuery {
            sql,
            params,
            count_sql,
            count_params,
            page: pagination.page,
            limit: pagination.limit,
        })
    }
}

/// WHERE clauses and their bind values, numbered as they are appended.
#[derive(Debug, Default)]
struct Conditions {
    clauses: Vec<String>,
    params: Vec<Value>,
}

impl Conditions {
    fn next_placeholder(&self) -> String {
        format!("${}", self.params.len() + 1)
    }

    fn push_literal(&mut self, clause: &str) {
        self.clauses.push(clause.to_string());
    }

    fn push_comparison(&mut self, column: &FilterColumn, value: Value) {
        let placeholder = self.next_placeholder();
        let clause = match column.comparison {
            Comparison::Eq => format!("{} = {placeholder}", column.column),
            Comparison::Gte => format!("{} >= {placeholder}", column.column),
            Comparison::Lte => format!("{} <= {placeholder}", column.column),
            Comparison::Contains => format!("{} ILIKE {placeholder}", column.column),
        };
        self.clauses.push(clause);
        self.params.push(value);
    }

    /// One bound pattern, referenced once per searchable column.
    fn push_search(&mut self, columns: &[&str], term: &str) {
        if columns.is_empty() {
            return;
        }
        let placeholder = self.next_placeholder();
        let matches = columns
            .iter()
            .map(|column| format!("{column} ILIKE {placeholder}"))
            .collect::<Vec<String>>()
            .join(" OR ");
        self.clauses.push(format!("({matches})"));
        self.params.push(contains_pattern(term).into());
    }

    fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }
}

fn bind_value(column: &FilterColumn, value: &FilterValue) -> Result<Value, SearchError> {
    let key = column.key;
    let bound: Value = match column.kind {
        ValueKind::Uuid => {
            let text = value.as_text();
            let id = Uuid::parse_str(text.trim())
                .map_err(|_| SearchError::invalid_filter(key, "expected a UUID"))?;
            id.into()
        }
        ValueKind::Price => {
            let price = value
                .as_number()
                .ok_or_else(|| SearchError::invalid_filter(key, "expected a number"))?;
            if price < 0.0 {
                return Err(SearchError::invalid_filter(key, "must not be negative"));
            }
            price.into()
        }
        ValueKind::Condition => {
            let condition = value
                .as_text()
                .parse::<Condition>()
                .map_err(|reason| SearchError::invalid_filter(key, reason))?;
            condition.as_str().into()
        }
        ValueKind::ListingStatus => {
            let status = value
                .as_text()
                .parse::<ListingStatus>()
                .map_err(|reason| SearchError::invalid_filter(key, reason))?;
            status.as_str().into()
        }
        ValueKind::Text => {
            let text = value.as_text();
            if text.trim().is_empty() {
                return Err(SearchError::invalid_filter(key, "must not be empty"));
            }
            match column.comparison {
                Comparison::Contains => contains_pattern(text.trim()).into(),
                _ => text.into(),
            }
        }
    };
    Ok(bound)
}

/// Rejects a lower bound that exceeds the upper bound on the same column.
fn check_ranges(descriptor: &SchemaDescriptor, request: &FilterRequest) -> Result<(), SearchError> {
    for lower in descriptor
        .filters
        .iter()
        .filter(|f| f.comparison == Comparison::Gte)
    {
        let Some(upper) = descriptor
            .filters
            .iter()
            .find(|f| f.comparison == Comparison::Lte && f.column == lower.column)
        else {
            continue;
        };

        let bound = |key: &str| {
            request
                .field_filters
                .get(key)
                .and_then(FilterValue::as_number)
        };
        let (Some(min), Some(max)) = (bound(lower.key), bound(upper.key)) else {
            continue;
        };

        if min > max {
            return Err(SearchError::InvalidRange { min, max });
        }
    }
    Ok(())
}

fn normalize_search_term(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
}

/// `%term%` with LIKE metacharacters escaped, so the term matches literally.
fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::entities::{EntityType, SortOrder};
    use crate::domain::search::schema::LISTING;

    fn build(request: &FilterRequest) -> Result<SearchQuery, SearchError> {
        SearchQueryBuilder::default().build(request)
    }

    fn where_part(sql: &str) -> &str {
        let start = sql.find(" WHERE ").map(|i| i + 7).unwrap_or(sql.len());
        let end = sql.find(" ORDER BY ").unwrap_or(sql.len());
        &sql[start..end]
    }

    #[test]
    fn test_listing_scenario() {
        let request = FilterRequest::new(EntityType::Listing)
            .with_search_term("brake")
            .with_filter("condition", "good")
            .with_filter("maxPrice", 50.0)
            .with_page(2, 10);

        let query = build(&request).unwrap();

        assert_eq!(
            where_part(&query.sql),
            "pl.status = 'active' AND pl.condition = $1 AND pl.price_usd <= $2 \
             AND (pl.name ILIKE $3 OR pl.description ILIKE $3)"
        );
        assert_eq!(
            query.count_params,
            vec![Value::from("good"), Value::from(50.0), Value::from("%brake%")]
        );
        assert_eq!(
            query.params,
            vec![
                Value::from("good"),
                Value::from(50.0),
                Value::from("%brake%"),
                Value::from(10_i64),
                Value::from(10_i64),
            ]
        );
        assert!(query.sql.ends_with(
            "ORDER BY pl.created_date DESC, pl.id DESC LIMIT $4 OFFSET $5"
        ));
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn test_sort_injection_rejected() {
        let request = FilterRequest::new(EntityType::Listing)
            .with_sort("DROP TABLE users;", SortOrder::Asc);

        let err = build(&request).unwrap_err();
        assert!(matches!(err, SearchError::InvalidSort { ref field, .. } if field == "DROP TABLE users;"));
    }

    #[test]
    fn test_deterministic_output() {
        let make = || {
            FilterRequest::new(EntityType::Listing)
                .with_filter("userId", "6f1c1c3e-2a0b-4c5e-9d5e-3b0f1d2c4a11")
                .with_filter("location", "Berlin")
                .with_filter("minPrice", "10")
                .with_filter("brandId", "0b8f6a3e-7c44-4f11-8f7e-5a2f0c1d9e22")
                .with_search_term("pads")
                .with_sort("price", SortOrder::Asc)
        };

        let first = build(&make()).unwrap();
        let second = build(&make()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clause_order_follows_schema_not_input() {
        let mut reversed = FilterRequest::new(EntityType::Part);
        for key in ["maxPrice", "condition", "categoryId"] {
            let value: FilterValue = match key {
                "maxPrice" => 80.0.into(),
                "condition" => "fair".into(),
                _ => "0b8f6a3e-7c44-4f11-8f7e-5a2f0c1d9e22".into(),
            };
            reversed = reversed.with_filter(key, value);
        }

        let query = build(&reversed).unwrap();
        assert_eq!(
            where_part(&query.sql),
            "cp.car_part_category_id = $1 AND cp.condition = $2 AND cp.price <= $3"
        );
    }

    #[test]
    fn test_search_term_is_bound_not_interpolated() {
        let hostile = "' OR 1=1 --";
        let request = FilterRequest::new(EntityType::Listing)
            .with_search_term(hostile)
            .with_filter("location", "x'; DROP TABLE product_listings; --");

        let query = build(&request).unwrap();
        assert!(!query.sql.contains("OR 1=1"));
        assert!(!query.sql.contains("DROP TABLE"));
        assert!(!query.count_sql.contains("OR 1=1"));
        assert!(query.count_params.contains(&Value::from("%' OR 1=1 --%")));
    }

    #[test]
    fn test_like_metacharacters_are_escaped() {
        let request = FilterRequest::new(EntityType::Part).with_search_term("100%_off\\");
        let query = build(&request).unwrap();
        assert_eq!(query.count_params, vec![Value::from("%100\\%\\_off\\\\%")]);
    }

    #[test]
    fn test_count_query_mirrors_filters() {
        let request = FilterRequest::new(EntityType::Listing)
            .with_filter("condition", "new")
            .with_filter("categoryId", "0b8f6a3e-7c44-4f11-8f7e-5a2f0c1d9e22")
            .with_search_term("mirror")
            .with_page(3, 5);

        let query = build(&request).unwrap();

        assert!(query.count_sql.starts_with("SELECT COUNT(*) AS count FROM product_listings pl"));
        assert_eq!(where_part(&query.sql), where_part(&query.count_sql));
        assert_eq!(&query.params[..query.count_params.len()], &query.count_params[..]);
        assert_eq!(query.params.len(), query.count_params.len() + 2);
        assert!(!query.count_sql.contains("ORDER BY"));
        assert!(!query.count_sql.contains("LIMIT"));
        assert!(!query.count_sql.contains("OFFSET"));
    }

    #[test]
    fn test_pagination_is_clamped() {
        let request = FilterRequest::new(EntityType::Brand).with_page(0, 0);
        let query = build(&request).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 1);
        assert_eq!(query.params, vec![Value::from(1_i64), Value::from(0_i64)]);

        let request = FilterRequest::new(EntityType::Brand).with_page(-3, 1_000);
        let query = build(&request).unwrap();
        assert_eq!(query.params, vec![Value::from(100_i64), Value::from(0_i64)]);
    }

    #[test]
    fn test_default_pagination() {
        let query = build(&FilterRequest::new(EntityType::Category)).unwrap();
        assert_eq!(query.params, vec![Value::from(20_i64), Value::from(0_i64)]);
    }

    #[test]
    fn test_unknown_filter_rejected() {
        let request = FilterRequest::new(EntityType::Listing).with_filter("bogus", "x");
        let err = build(&request).unwrap_err();
        assert!(matches!(err, SearchError::InvalidFilter { ref key, .. } if key == "bogus"));
    }

    #[test]
    fn test_filter_of_other_entity_rejected() {
        let request = FilterRequest::new(EntityType::Part).with_filter("location", "Lyon");
        assert!(matches!(
            build(&request),
            Err(SearchError::InvalidFilter { key, .. }) if key == "location"
        ));
    }

    #[test]
    fn test_default_visibility_applies_without_status() {
        let query = build(&FilterRequest::new(EntityType::Listing)).unwrap();
        assert_eq!(where_part(&query.sql), "pl.status = 'active'");
        assert!(query.count_sql.ends_with("WHERE pl.status = 'active'"));
    }

    #[test]
    fn test_explicit_status_replaces_default_visibility() {
        let request = FilterRequest::new(EntityType::Listing).with_filter("status", "sold");
        let query = build(&request).unwrap();
        assert_eq!(where_part(&query.sql), "pl.status = $1");
        assert_eq!(query.count_params, vec![Value::from("sold")]);
    }

    #[test]
    fn test_invalid_status_value_rejected() {
        let request = FilterRequest::new(EntityType::Listing).with_filter("status", "AVAILABLE");
        assert!(matches!(
            build(&request),
            Err(SearchError::InvalidFilter { key, .. }) if key == "status"
        ));
    }

    #[test]
    fn test_listing_brand_filter_joins_through_part() {
        let brand_id = Uuid::new_v4();
        let request = FilterRequest::new(EntityType::Listing).with_filter("brandId", brand_id);
        let query = build(&request).unwrap();

        assert!(query.sql.contains("LEFT JOIN car_parts cp ON pl.car_part_id = cp.id"));
        assert!(where_part(&query.sql).contains("cp.car_brand_id = $1"));
        assert!(!query.sql.contains("pl.car_brand_id"));
        assert_eq!(query.count_params[0], Value::from(brand_id));
    }

    #[test]
    fn test_invalid_uuid_rejected() {
        let request = FilterRequest::new(EntityType::Model).with_filter("brandId", "42");
        assert!(matches!(
            build(&request),
            Err(SearchError::InvalidFilter { key, .. }) if key == "brandId"
        ));
    }

    #[test]
    fn test_price_range() {
        let request = FilterRequest::new(EntityType::Listing)
            .with_filter("minPrice", 100.0)
            .with_filter("maxPrice", 20.0);
        assert_eq!(
            build(&request),
            Err(SearchError::InvalidRange {
                min: 100.0,
                max: 20.0
            })
        );

        let request = FilterRequest::new(EntityType::Part)
            .with_filter("minPrice", "20")
            .with_filter("maxPrice", "20");
        let query = build(&request).unwrap();
        assert_eq!(
            where_part(&query.sql),
            "cp.price >= $1 AND cp.price <= $2"
        );
    }

    #[test]
    fn test_negative_or_non_numeric_price_rejected() {
        for value in [FilterValue::from(-1.0), FilterValue::from("cheap")] {
            let request = FilterRequest::new(EntityType::Part).with_filter("minPrice", value);
            assert!(matches!(
                build(&request),
                Err(SearchError::InvalidFilter { key, .. }) if key == "minPrice"
            ));
        }
    }

    #[test]
    fn test_location_is_substring_match() {
        let request = FilterRequest::new(EntityType::Listing).with_filter("location", " Austin ");
        let query = build(&request).unwrap();
        assert!(where_part(&query.sql).ends_with("pl.location ILIKE $1"));
        assert_eq!(query.count_params, vec![Value::from("%Austin%")]);
    }

    #[test]
    fn test_blank_search_term_is_ignored() {
        let request = FilterRequest::new(EntityType::Brand).with_search_term("   ");
        let query = build(&request).unwrap();
        assert!(!query.sql.contains("WHERE"));
        assert_eq!(query.count_sql, "SELECT COUNT(*) AS count FROM car_brands cb");
    }

    #[test]
    fn test_single_column_search() {
        let request = FilterRequest::new(EntityType::Model)
            .with_search_term("civ")
            .with_filter("brandId", "0b8f6a3e-7c44-4f11-8f7e-5a2f0c1d9e22")
            .with_sort("name", SortOrder::Asc);
        let query = build(&request).unwrap();

        assert_eq!(
            where_part(&query.sql),
            "cm.car_brand_id = $1 AND (cm.name ILIKE $2)"
        );
        assert!(query.sql.contains("ORDER BY cm.name ASC, cm.id ASC LIMIT $3 OFFSET $4"));
    }

    #[test]
    fn test_sort_aliases() {
        let request = FilterRequest::new(EntityType::Listing).with_sort("price_usd", SortOrder::Asc);
        let query = build(&request).unwrap();
        assert!(query.sql.contains("ORDER BY pl.price_usd ASC"));
    }

    #[test]
    fn test_missing_descriptor_is_configuration_error() {
        static LISTINGS_ONLY: &[SchemaDescriptor] = &[LISTING];
        let builder = SearchQueryBuilder::new(LISTINGS_ONLY);

        assert!(builder.build(&FilterRequest::new(EntityType::Listing)).is_ok());
        assert!(matches!(
            builder.build(&FilterRequest::new(EntityType::Part)),
            Err(SearchError::Configuration(_))
        ));
    }
}
