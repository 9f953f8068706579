use std::str::FromStr;

use chrono::{DateTime, Utc};
use sea_orm::{DbErr, QueryResult};
use uuid::Uuid;

use crate::domain::{
    catalog::{
        Brand, Category, Condition, Listing, ListingStatus, Model, Part, year_range,
    },
    search::value_objects::ConditionCount,
};

fn parse_column<T>(row: &QueryResult, column: &str) -> Result<T, DbErr>
where
    T: FromStr<Err = String>,
{
    let raw: String = row.try_get("", column)?;
    raw.parse::<T>().map_err(DbErr::Type)
}

impl TryFrom<&QueryResult> for Listing {
    type Error = DbErr;

    fn try_from(row: &QueryResult) -> Result<Self, Self::Error> {
        Ok(Listing {
            id: row.try_get("", "id")?,
            seller_id: row.try_get("", "user_id")?,
            part_id: row.try_get("", "car_part_id")?,
            name: row.try_get("", "name")?,
            description: row.try_get("", "description")?,
            price_usd: row.try_get("", "price_usd")?,
            condition: parse_column::<Condition>(row, "condition")?,
            location: row.try_get("", "location")?,
            status: parse_column::<ListingStatus>(row, "status")?,
            created_at: row.try_get::<DateTime<Utc>>("", "created_date")?,
            seller_username: row.try_get("", "seller_username")?,
            part_name: row.try_get("", "part_name")?,
            category_name: row.try_get("", "category_name")?,
            brand_name: row.try_get("", "brand_name")?,
            model_name: row.try_get("", "model_name")?,
        })
    }
}

impl TryFrom<&QueryResult> for Part {
    type Error = DbErr;

    fn try_from(row: &QueryResult) -> Result<Self, Self::Error> {
        Ok(Part {
            id: row.try_get("", "id")?,
            category_id: row.try_get("", "car_part_category_id")?,
            brand_id: row.try_get::<Option<Uuid>>("", "car_brand_id")?,
            model_id: row.try_get::<Option<Uuid>>("", "car_model_id")?,
            name: row.try_get("", "name")?,
            serial_number: row.try_get("", "serial_number")?,
            description: row.try_get("", "description")?,
            price: row.try_get("", "price")?,
            condition: parse_column::<Condition>(row, "condition")?,
            created_at: row.try_get::<DateTime<Utc>>("", "created_date")?,
            category_name: row.try_get("", "category_name")?,
            brand_name: row.try_get("", "brand_name")?,
            model_name: row.try_get("", "model_name")?,
        })
    }
}

impl TryFrom<&QueryResult> for Brand {
    type Error = DbErr;

    fn try_from(row: &QueryResult) -> Result<Self, Self::Error> {
        Ok(Brand {
            id: row.try_get("", "id")?,
            name: row.try_get("", "name")?,
            created_at: row.try_get::<DateTime<Utc>>("", "created_date")?,
        })
    }
}

impl TryFrom<&QueryResult> for Model {
    type Error = DbErr;

    fn try_from(row: &QueryResult) -> Result<Self, Self::Error> {
        let years_start: Option<i32> = row.try_get("", "years_start")?;
        let years_end: Option<i32> = row.try_get("", "years_end")?;

        Ok(Model {
            id: row.try_get("", "id")?,
            brand_id: row.try_get("", "car_brand_id")?,
            name: row.try_get("", "name")?,
            years_start,
            years_end,
            year_range: year_range(years_start, years_end),
            created_at: row.try_get::<DateTime<Utc>>("", "created_date")?,
            brand_name: row.try_get("", "brand_name")?,
        })
    }
}

impl TryFrom<&QueryResult> for Category {
    type Error = DbErr;

    fn try_from(row: &QueryResult) -> Result<Self, Self::Error> {
        Ok(Category {
            id: row.try_get("", "id")?,
            name: row.try_get("", "name")?,
            created_at: row.try_get::<DateTime<Utc>>("", "created_date")?,
        })
    }
}

impl TryFrom<&QueryResult> for ConditionCount {
    type Error = DbErr;

    fn try_from(row: &QueryResult) -> Result<Self, Self::Error> {
        Ok(ConditionCount {
            value: parse_column::<Condition>(row, "condition")?,
            count: row.try_get("", "count")?,
        })
    }
}
