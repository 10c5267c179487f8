use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::models::AddFavoriteCommand;
use crate::domain::favorite::models::Favorite;
use crate::domain::movie::models::KinopoiskId;
use crate::domain::user::models::Identity;
use crate::domain::user::models::UserId;

/// Port for favorites operations on behalf of an authenticated caller.
///
/// None of these take a user id: ownership always comes from the identity.
#[async_trait]
pub trait FavoriteServicePort: Send + Sync + 'static {
    /// Add a movie to the caller's favorites.
    ///
    /// # Errors
    /// * `AlreadyExists` - The caller already saved this movie
    /// * `OwnerNotFound` - The caller's user row is gone
    /// * `DatabaseError` - Database operation failed
    async fn add_favorite(
        &self,
        identity: &Identity,
        command: AddFavoriteCommand,
    ) -> Result<Favorite, FavoriteError>;

    /// Remove a movie from the caller's favorites and return the removed record.
    ///
    /// # Errors
    /// * `NotFound` - The movie is not in the caller's favorites
    /// * `DatabaseError` - Database operation failed
    async fn remove_favorite(
        &self,
        identity: &Identity,
        kinopoisk_id: KinopoiskId,
    ) -> Result<Favorite, FavoriteError>;

    /// List the caller's favorites.
    async fn list_favorites(&self, identity: &Identity) -> Result<Vec<Favorite>, FavoriteError>;
}

/// Persistence operations for favorites.
#[async_trait]
pub trait FavoriteRepository: Send + Sync + 'static {
    /// Insert a favorite in a single transaction.
    ///
    /// # Errors
    /// * `AlreadyExists` - (user_id, kinopoisk_id) is already present
    /// * `OwnerNotFound` - user_id references no user
    /// * `DatabaseError` - Database operation failed
    async fn add(&self, favorite: Favorite) -> Result<Favorite, FavoriteError>;

    /// Delete the matching row and return it, or `None` if there was none.
    async fn remove(
        &self,
        user_id: &UserId,
        kinopoisk_id: KinopoiskId,
    ) -> Result<Option<Favorite>, FavoriteError>;

    /// Point lookup by owner and movie.
    async fn get_one(
        &self,
        user_id: &UserId,
        kinopoisk_id: KinopoiskId,
    ) -> Result<Option<Favorite>, FavoriteError>;

    /// All favorites of one user. Order is not significant.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, FavoriteError>;
}
