use std::time::Instant;

use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, QueryResult, Statement,
};
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{
    catalog::{Brand, Category, Listing, Model, Part},
    common::entities::app_errors::CoreError,
    search::{
        entities::SearchQuery,
        ports::SearchRepository,
        schema::{BRAND, CATEGORY, LISTING, MODEL, PART, SchemaDescriptor},
        value_objects::ConditionCount,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresSearchRepository {
    pub db: DatabaseConnection,
}

impl PostgresSearchRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch<T>(&self, query: SearchQuery, entity: &str) -> Result<Vec<T>, CoreError>
    where
        T: for<'r> TryFrom<&'r QueryResult, Error = DbErr>,
    {
        let started = Instant::now();
        let rows = self.db.query_all(query.statement()).await.map_err(|e| {
            error!("Failed to search {}: {}", entity, e);
            CoreError::InternalServerError
        })?;

        debug!(
            sql = %query.sql,
            params = query.params.len(),
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "{} search executed",
            entity
        );

        rows.iter()
            .map(|row| T::try_from(row))
            .collect::<Result<Vec<T>, DbErr>>()
            .map_err(|e| {
                error!("Failed to map {} row: {}", entity, e);
                CoreError::InternalServerError
            })
    }

    async fn find_by_id<T>(
        &self,
        descriptor: &SchemaDescriptor,
        id: Uuid,
    ) -> Result<Option<T>, CoreError>
    where
        T: for<'r> TryFrom<&'r QueryResult, Error = DbErr>,
    {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                "SELECT {} FROM {} WHERE {}.id = $1",
                descriptor.projection,
                descriptor.from_clause(),
                descriptor.alias
            ),
            [id.into()],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to get {} by id: {}", descriptor.entity_type, e);
            CoreError::InternalServerError
        })?;

        row.as_ref()
            .map(T::try_from)
            .transpose()
            .map_err(|e| {
                error!("Failed to map {} row: {}", descriptor.entity_type, e);
                CoreError::InternalServerError
            })
    }
}

/// Decodes the single row of a count statement. A count query always yields
/// one row, so a missing row is a failure like a bad column.
fn total_from(count: Option<Result<i64, DbErr>>) -> Result<i64, CoreError> {
    match count {
        Some(Ok(total)) => Ok(total),
        Some(Err(e)) => {
            error!("Failed to decode search count: {}", e);
            Err(CoreError::InternalServerError)
        }
        None => {
            error!("Count statement returned no row");
            Err(CoreError::InternalServerError)
        }
    }
}

impl SearchRepository for PostgresSearchRepository {
    async fn fetch_listings(&self, query: SearchQuery) -> Result<Vec<Listing>, CoreError> {
        self.fetch(query, "listing").await
    }

    async fn fetch_parts(&self, query: SearchQuery) -> Result<Vec<Part>, CoreError> {
        self.fetch(query, "part").await
    }

    async fn fetch_brands(&self, query: SearchQuery) -> Result<Vec<Brand>, CoreError> {
        self.fetch(query, "brand").await
    }

    async fn fetch_models(&self, query: SearchQuery) -> Result<Vec<Model>, CoreError> {
        self.fetch(query, "model").await
    }

    async fn fetch_categories(&self, query: SearchQuery) -> Result<Vec<Category>, CoreError> {
        self.fetch(query, "category").await
    }

    async fn count(&self, query: SearchQuery) -> Result<i64, CoreError> {
        let started = Instant::now();
        let row = self
            .db
            .query_one(query.count_statement())
            .await
            .map_err(|e| {
                error!("Failed to count search results: {}", e);
                CoreError::InternalServerError
            })?;

        debug!(
            sql = %query.count_sql,
            params = query.count_params.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "count executed"
        );

        total_from(row.map(|row| row.try_get::<i64>("", "count")))
    }

    async fn count_active_listings_by_condition(&self) -> Result<Vec<ConditionCount>, CoreError> {
        let stmt = Statement::from_string(
            DatabaseBackend::Postgres,
            r#"
            SELECT condition, COUNT(*) AS count
            FROM product_listings
            WHERE status = 'active' AND condition IS NOT NULL
            GROUP BY condition
            ORDER BY condition
            "#,
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to count listings by condition: {}", e);
            CoreError::InternalServerError
        })?;

        rows.iter()
            .map(ConditionCount::try_from)
            .collect::<Result<Vec<ConditionCount>, DbErr>>()
            .map_err(|e| {
                error!("Failed to map condition count: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn get_listing_by_id(&self, listing_id: Uuid) -> Result<Option<Listing>, CoreError> {
        self.find_by_id(&LISTING, listing_id).await
    }

    async fn get_part_by_id(&self, part_id: Uuid) -> Result<Option<Part>, CoreError> {
        self.find_by_id(&PART, part_id).await
    }

    async fn get_brand_by_id(&self, brand_id: Uuid) -> Result<Option<Brand>, CoreError> {
        self.find_by_id(&BRAND, brand_id).await
    }

    async fn get_model_by_id(&self, model_id: Uuid) -> Result<Option<Model>, CoreError> {
        self.find_by_id(&MODEL, model_id).await
    }

    async fn get_category_by_id(&self, category_id: Uuid) -> Result<Option<Category>, CoreError> {
        self.find_by_id(&CATEGORY, category_id).await
    }

    async fn get_compatible_models(&self, part_id: Uuid) -> Result<Vec<Model>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                "SELECT {} FROM {} \
                 JOIN parts_compatibility pc ON cm.id = pc.car_model_id \
                 WHERE pc.car_part_id = $1 \
                 ORDER BY cb.name ASC, cm.name ASC",
                MODEL.projection,
                MODEL.from_clause()
            ),
            [part_id.into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to get compatible models of part {}: {}", part_id, e);
            CoreError::InternalServerError
        })?;

        rows.iter()
            .map(Model::try_from)
            .collect::<Result<Vec<Model>, DbErr>>()
            .map_err(|e| {
                error!("Failed to map model row: {}", e);
                CoreError::InternalServerError
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_from_count_row() {
        assert_eq!(total_from(Some(Ok(42))).unwrap(), 42);
        assert_eq!(total_from(Some(Ok(0))).unwrap(), 0);
    }

    #[test]
    fn test_undecodable_count_is_an_error() {
        let err = total_from(Some(Err(DbErr::Type(
            "column \"count\" not found".to_string(),
        ))))
        .unwrap_err();

        assert!(matches!(err, CoreError::InternalServerError));
    }

    #[test]
    fn test_missing_count_row_is_an_error() {
        assert!(matches!(
            total_from(None),
            Err(CoreError::InternalServerError)
        ));
    }
}
