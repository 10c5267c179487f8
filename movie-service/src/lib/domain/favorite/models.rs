use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::favorite::errors::FavoriteTitleError;
use crate::domain::movie::models::KinopoiskId;
use crate::domain::user::models::UserId;

/// A movie saved by a user.
///
/// `title` and `year` are copies supplied by the client when the favorite is
/// added; they are not refreshed from the movie provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub kinopoisk_id: KinopoiskId,
    pub title: FavoriteTitle,
    pub year: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FavoriteId(pub Uuid);

impl FavoriteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FavoriteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteTitle(String);

impl FavoriteTitle {
    pub fn new(title: String) -> Result<Self, FavoriteTitleError> {
        if title.trim().is_empty() {
            return Err(FavoriteTitleError::Empty);
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to add a movie to the caller's favorites
#[derive(Debug, Clone)]
pub struct AddFavoriteCommand {
    pub kinopoisk_id: KinopoiskId,
    pub title: FavoriteTitle,
    pub year: i32,
}

impl AddFavoriteCommand {
    pub fn new(kinopoisk_id: KinopoiskId, title: FavoriteTitle, year: i32) -> Self {
        Self {
            kinopoisk_id,
            title,
            year,
        }
    }
}
