//! Schema descriptors for the searchable marketplace entities.
//!
//! Each descriptor lists everything the query builder may put into SQL text
//! for one entity: table, joins, projection, searchable columns, filter keys
//! and sort keys. Nothing outside these tables is ever interpolated.

use crate::domain::search::entities::{EntityType, SearchError};

/// How a filter value must be coerced before it is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Uuid,
    Price,
    Condition,
    ListingStatus,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Gte,
    Lte,
    /// Case-insensitive substring match.
    Contains,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterColumn {
    pub key: &'static str,
    pub column: &'static str,
    pub kind: ValueKind,
    pub comparison: Comparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortColumn {
    pub key: &'static str,
    pub column: &'static str,
}

/// A clause applied when the request does not filter on `key` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultVisibility {
    pub key: &'static str,
    pub clause: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub entity_type: EntityType,
    pub table: &'static str,
    pub alias: &'static str,
    pub projection: &'static str,
    pub joins: &'static [&'static str],
    pub search_columns: &'static [&'static str],
    pub filters: &'static [FilterColumn],
    pub sorts: &'static [SortColumn],
    pub default_sort: &'static str,
    pub default_visibility: Option<DefaultVisibility>,
}

impl SchemaDescriptor {
    pub fn filter(&self, key: &str) -> Option<&FilterColumn> {
        self.filters.iter().find(|filter| filter.key == key)
    }

    pub fn sort_column(&self, key: &str) -> Option<&'static str> {
        self.sorts
            .iter()
            .find(|sort| sort.key == key)
            .map(|sort| sort.column)
    }

    pub fn allowed_sort_keys(&self) -> String {
        self.sorts
            .iter()
            .map(|sort| sort.key)
            .collect::<Vec<&str>>()
            .join(", ")
    }

    pub fn from_clause(&self) -> String {
        let mut from = format!("{} {}", self.table, self.alias);
        for join in self.joins {
            from.push(' ');
            from.push_str(join);
        }
        from
    }
}

const PART_JOINS: [&str; 3] = [
    "LEFT JOIN car_parts_categories cpc ON cp.car_part_category_id = cpc.id",
    "LEFT JOIN car_brands cb ON cp.car_brand_id = cb.id",
    "LEFT JOIN car_models cm ON cp.car_model_id = cm.id",
];

pub const LISTING: SchemaDescriptor = SchemaDescriptor {
    entity_type: EntityType::Listing,
    table: "product_listings",
    alias: "pl",
    projection: "pl.id, pl.user_id, pl.car_part_id, pl.name, pl.description, \
                 pl.price_usd::float8 AS price_usd, pl.condition, pl.location, pl.status, \
                 pl.created_date, u.username AS seller_username, cp.name AS part_name, \
                 cpc.name AS category_name, cb.name AS brand_name, cm.name AS model_name",
    joins: &[
        "LEFT JOIN users u ON pl.user_id = u.id",
        "LEFT JOIN car_parts cp ON pl.car_part_id = cp.id",
        PART_JOINS[0],
        PART_JOINS[1],
        PART_JOINS[2],
    ],
    search_columns: &["pl.name", "pl.description"],
    filters: &[
        FilterColumn {
            key: "status",
            column: "pl.status",
            kind: ValueKind::ListingStatus,
            comparison: Comparison::Eq,
        },
        FilterColumn {
            key: "condition",
            column: "pl.condition",
            kind: ValueKind::Condition,
            comparison: Comparison::Eq,
        },
        FilterColumn {
            key: "minPrice",
            column: "pl.price_usd",
            kind: ValueKind::Price,
            comparison: Comparison::Gte,
        },
        FilterColumn {
            key: "maxPrice",
            column: "pl.price_usd",
            kind: ValueKind::Price,
            comparison: Comparison::Lte,
        },
        FilterColumn {
            key: "location",
            column: "pl.location",
            kind: ValueKind::Text,
            comparison: Comparison::Contains,
        },
        // Listings carry no brand/model/category columns of their own.
        FilterColumn {
            key: "brandId",
            column: "cp.car_brand_id",
            kind: ValueKind::Uuid,
            comparison: Comparison::Eq,
        },
        FilterColumn {
            key: "modelId",
            column: "cp.car_model_id",
            kind: ValueKind::Uuid,
            comparison: Comparison::Eq,
        },
        FilterColumn {
            key: "categoryId",
            column: "cp.car_part_category_id",
            kind: ValueKind::Uuid,
            comparison: Comparison::Eq,
        },
        FilterColumn {
            key: "userId",
            column: "pl.user_id",
            kind: ValueKind::Uuid,
            comparison: Comparison::Eq,
        },
    ],
    sorts: &[
        SortColumn {
            key: "createdDate",
            column: "pl.created_date",
        },
        SortColumn {
            key: "created_date",
            column: "pl.created_date",
        },
        SortColumn {
            key: "price",
            column: "pl.price_usd",
        },
        SortColumn {
            key: "price_usd",
            column: "pl.price_usd",
        },
        SortColumn {
            key: "name",
            column: "pl.name",
        },
        SortColumn {
            key: "condition",
            column: "pl.condition",
        },
    ],
    default_sort: "createdDate",
    default_visibility: Some(DefaultVisibility {
        key: "status",
        clause: "pl.status = 'active'",
    }),
};

pub const PART: SchemaDescriptor = SchemaDescriptor {
    entity_type: EntityType::Part,
    table: "car_parts",
    alias: "cp",
    projection: "cp.id, cp.car_part_category_id, cp.car_brand_id, cp.car_model_id, cp.name, \
                 cp.serial_number, cp.description, cp.price::float8 AS price, cp.condition, \
                 cp.created_date, cpc.name AS category_name, cb.name AS brand_name, \
                 cm.name AS model_name",
    joins: &PART_JOINS,
    search_columns: &["cp.name", "cp.description"],
    filters: &[
        FilterColumn {
            key: "categoryId",
            column: "cp.car_part_category_id",
            kind: ValueKind::Uuid,
            comparison: Comparison::Eq,
        },
        FilterColumn {
            key: "brandId",
            column: "cp.car_brand_id",
            kind: ValueKind::Uuid,
            comparison: Comparison::Eq,
        },
        FilterColumn {
            key: "modelId",
            column: "cp.car_model_id",
            kind: ValueKind::Uuid,
            comparison: Comparison::Eq,
        },
        FilterColumn {
            key: "condition",
            column: "cp.condition",
            kind: ValueKind::Condition,
            comparison: Comparison::Eq,
        },
        FilterColumn {
            key: "minPrice",
            column: "cp.price",
            kind: ValueKind::Price,
            comparison: Comparison::Gte,
        },
        FilterColumn {
            key: "maxPrice",
            column: "cp.price",
            kind: ValueKind::Price,
            comparison: Comparison::Lte,
        },
    ],
    sorts: &[
        SortColumn {
            key: "createdDate",
            column: "cp.created_date",
        },
        SortColumn {
            key: "created_date",
            column: "cp.created_date",
        },
        SortColumn {
            key: "price",
            column: "cp.price",
        },
        SortColumn {
            key: "name",
            column: "cp.name",
        },
        SortColumn {
            key: "condition",
            column: "cp.condition",
        },
    ],
    default_sort: "createdDate",
    default_visibility: None,
};

pub const BRAND: SchemaDescriptor = SchemaDescriptor {
    entity_type: EntityType::Brand,
    table: "car_brands",
    alias: "cb",
    projection: "cb.id, cb.name, cb.created_date",
    joins: &[],
    search_columns: &["cb.name"],
    filters: &[],
    sorts: &[
        SortColumn {
            key: "createdDate",
            column: "cb.created_date",
        },
        SortColumn {
            key: "created_date",
            column: "cb.created_date",
        },
        SortColumn {
            key: "name",
            column: "cb.name",
        },
    ],
    default_sort: "createdDate",
    default_visibility: None,
};

pub const MODEL: SchemaDescriptor = SchemaDescriptor {
    entity_type: EntityType::Model,
    table: "car_models",
    alias: "cm",
    projection: "cm.id, cm.car_brand_id, cm.name, cm.years_start, cm.years_end, \
                 cm.created_date, cb.name AS brand_name",
    joins: &["LEFT JOIN car_brands cb ON cm.car_brand_id = cb.id"],
    search_columns: &["cm.name"],
    filters: &[FilterColumn {
        key: "brandId",
        column: "cm.car_brand_id",
        kind: ValueKind::Uuid,
        comparison: Comparison::Eq,
    }],
    sorts: &[
        SortColumn {
            key: "createdDate",
            column: "cm.created_date",
        },
        SortColumn {
            key: "created_date",
            column: "cm.created_date",
        },
        SortColumn {
            key: "name",
            column: "cm.name",
        },
        SortColumn {
            key: "yearsStart",
            column: "cm.years_start",
        },
        SortColumn {
            key: "years_start",
            column: "cm.years_start",
        },
    ],
    default_sort: "createdDate",
    default_visibility: None,
};

pub const CATEGORY: SchemaDescriptor = SchemaDescriptor {
    entity_type: EntityType::Category,
    table: "car_parts_categories",
    alias: "cpc",
    projection: "cpc.id, cpc.name, cpc.created_date",
    joins: &[],
    search_columns: &["cpc.name"],
    filters: &[],
    sorts: &[
        SortColumn {
            key: "createdDate",
            column: "cpc.created_date",
        },
        SortColumn {
            key: "created_date",
            column: "cpc.created_date",
        },
        SortColumn {
            key: "name",
            column: "cpc.name",
        },
    ],
    default_sort: "createdDate",
    default_visibility: None,
};

pub static MARKETPLACE_SCHEMA: &[SchemaDescriptor] = &[LISTING, PART, BRAND, MODEL, CATEGORY];

pub fn descriptor_for(
    schema: &[SchemaDescriptor],
    entity_type: EntityType,
) -> Result<&SchemaDescriptor, SearchError> {
    schema
        .iter()
        .find(|descriptor| descriptor.entity_type == entity_type)
        .ok_or_else(|| {
            SearchError::Configuration(format!("no schema descriptor for entity type '{entity_type}'"))
        })
}
