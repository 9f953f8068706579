use thiserror::Error;

use crate::domain::search::entities::errors::SearchError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Search term required")]
    SearchTermRequired,

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}
