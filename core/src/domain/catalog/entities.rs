use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::catalog::value_objects::{Condition, ListingStatus};

/// A product listing together with the display names of the seller and the
/// part it advertises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Listing {
    pub id: Uuid,
    pub seller_id: Uuid,
    pub part_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub price_usd: f64,
    pub condition: Condition,
    pub location: Option<String>,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    pub seller_username: Option<String>,
    pub part_name: Option<String>,
    pub category_name: Option<String>,
    pub brand_name: Option<String>,
    pub model_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Part {
    pub id: Uuid,
    pub category_id: Uuid,
    pub brand_id: Option<Uuid>,
    pub model_id: Option<Uuid>,
    pub name: String,
    pub serial_number: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub condition: Condition,
    pub created_at: DateTime<Utc>,
    pub category_name: Option<String>,
    pub brand_name: Option<String>,
    pub model_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Model {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub name: String,
    pub years_start: Option<i32>,
    pub years_end: Option<i32>,
    /// `start-end`, `start+` or `Unknown`.
    pub year_range: String,
    pub created_at: DateTime<Utc>,
    pub brand_name: Option<String>,
}

pub fn year_range(years_start: Option<i32>, years_end: Option<i32>) -> String {
    match (years_start, years_end) {
        (Some(start), Some(end)) => format!("{start}-{end}"),
        (Some(start), None) => format!("{start}+"),
        _ => "Unknown".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
