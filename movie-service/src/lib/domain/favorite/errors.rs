use thiserror::Error;

use crate::domain::movie::errors::KinopoiskIdError;
use crate::domain::movie::models::KinopoiskId;
use crate::domain::user::models::UserId;

/// Error for FavoriteTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FavoriteTitleError {
    #[error("Title must not be empty")]
    Empty,
}

/// Top-level error for favorites operations
#[derive(Debug, Clone, Error)]
pub enum FavoriteError {
    #[error("Invalid Kinopoisk ID: {0}")]
    InvalidKinopoiskId(#[from] KinopoiskIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] FavoriteTitleError),

    #[error("Movie {0} already in favorites")]
    AlreadyExists(KinopoiskId),

    #[error("Movie {0} not found in favorites")]
    NotFound(KinopoiskId),

    /// The owning user row no longer exists.
    #[error("User not found: {0}")]
    OwnerNotFound(UserId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for FavoriteError {
    fn from(err: anyhow::Error) -> Self {
        FavoriteError::Unknown(err.to_string())
    }
}
