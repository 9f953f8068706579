use thiserror::Error;

/// Rejections raised while turning a filter request into SQL. None of them
/// is raised after any SQL text has been produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("Search is misconfigured: {0}")]
    Configuration(String),

    #[error("Invalid filter '{key}': {reason}")]
    InvalidFilter { key: String, reason: String },

    #[error("Invalid sort field '{field}', expected one of: {allowed}")]
    InvalidSort { field: String, allowed: String },

    #[error("Invalid price range: minPrice {min} is greater than maxPrice {max}")]
    InvalidRange { min: f64, max: f64 },
}

impl SearchError {
    pub fn invalid_filter(key: impl Into<String>, reason: impl Into<String>) -> Self {
        SearchError::InvalidFilter {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by the caller's input rather than by
    /// how the search is wired.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, SearchError::Configuration(_))
    }
}
