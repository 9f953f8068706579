use crate::{
    domain::common::{MarketConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        search::repositories::PostgresSearchRepository,
    },
};

pub type CarPartsService = Service<PostgresSearchRepository, PostgresHealthCheckRepository>;

pub async fn create_service(config: MarketConfig) -> Result<CarPartsService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    })
    .await?;

    let search_repository = PostgresSearchRepository::new(postgres.get_db());
    let health_check_repository = PostgresHealthCheckRepository::new(postgres.get_db());

    Ok(Service::new(search_repository, health_check_repository))
}
