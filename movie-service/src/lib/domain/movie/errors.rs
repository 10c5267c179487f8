use thiserror::Error;

use crate::domain::movie::models::KinopoiskId;

/// Error for KinopoiskId validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KinopoiskIdError {
    #[error("Kinopoisk ID must be positive, got {0}")]
    NotPositive(i32),
}

/// Error for SearchQuery validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchQueryError {
    #[error("Search query must not be empty")]
    Empty,
}

/// Top-level error for movie catalog operations
#[derive(Debug, Clone, Error)]
pub enum MovieError {
    #[error("Invalid Kinopoisk ID: {0}")]
    InvalidKinopoiskId(#[from] KinopoiskIdError),

    #[error("Invalid search query: {0}")]
    InvalidQuery(#[from] SearchQueryError),

    #[error("No films found for query: {0}")]
    NoResults(String),

    #[error("Film not found: {0}")]
    NotFound(KinopoiskId),

    /// Provider answered with a non-success status, an unreadable body, or
    /// could not be reached at all.
    #[error("Movie provider failure: {0}")]
    Upstream(String),
}
