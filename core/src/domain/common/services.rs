use crate::domain::{
    health::ports::HealthCheckRepository,
    search::{builder::SearchQueryBuilder, ports::SearchRepository},
};

#[derive(Clone)]
pub struct Service<SR, HC>
where
    SR: SearchRepository,
    HC: HealthCheckRepository,
{
    pub(crate) search_repository: SR,
    pub(crate) health_check_repository: HC,
    pub(crate) query_builder: SearchQueryBuilder<'static>,
}

impl<SR, HC> Service<SR, HC>
where
    SR: SearchRepository,
    HC: HealthCheckRepository,
{
    pub fn new(search_repository: SR, health_check_repository: HC) -> Self {
        Self {
            search_repository,
            health_check_repository,
            query_builder: SearchQueryBuilder::default(),
        }
    }
}
