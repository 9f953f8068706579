use std::time::Instant;

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::{error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};

#[derive(Debug, Clone)]
pub struct PostgresHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl PostgresHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn probe() -> Statement {
        Statement::from_string(DatabaseBackend::Postgres, "SELECT 1")
    }
}

impl HealthCheckRepository for PostgresHealthCheckRepository {
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let started = Instant::now();
        let result = self.db.execute(Self::probe()).await;
        let elapsed = started.elapsed().as_millis() as u64;

        match result {
            Ok(_) => Ok(DatabaseHealthStatus::up(elapsed)),
            Err(e) => {
                warn!("Database readiness probe failed: {}", e);
                Ok(DatabaseHealthStatus::down(elapsed, e.to_string()))
            }
        }
    }

    async fn health(&self) -> Result<u64, CoreError> {
        let started = Instant::now();
        self.db.execute(Self::probe()).await.map_err(|e| {
            error!("Database health check failed: {}", e);
            CoreError::ServiceUnavailable(e.to_string())
        })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}
