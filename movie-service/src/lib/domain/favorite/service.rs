use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::models::AddFavoriteCommand;
use crate::domain::favorite::models::Favorite;
use crate::domain::favorite::models::FavoriteId;
use crate::domain::favorite::ports::FavoriteRepository;
use crate::domain::favorite::ports::FavoriteServicePort;
use crate::domain::movie::models::KinopoiskId;
use crate::domain::user::models::Identity;

/// Domain service implementation for favorites.
///
/// Each (user, movie) pair moves from absent to present through
/// `add_favorite` and back through `remove_favorite`; no other transition
/// exists.
pub struct FavoriteService<FR>
where
    FR: FavoriteRepository,
{
    repository: Arc<FR>,
}

impl<FR> FavoriteService<FR>
where
    FR: FavoriteRepository,
{
    pub fn new(repository: Arc<FR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<FR> FavoriteServicePort for FavoriteService<FR>
where
    FR: FavoriteRepository,
{
    async fn add_favorite(
        &self,
        identity: &Identity,
        command: AddFavoriteCommand,
    ) -> Result<Favorite, FavoriteError> {
        if self
            .repository
            .get_one(&identity.user_id, command.kinopoisk_id)
            .await?
            .is_some()
        {
            return Err(FavoriteError::AlreadyExists(command.kinopoisk_id));
        }

        let favorite = Favorite {
            id: FavoriteId::new(),
            user_id: identity.user_id,
            kinopoisk_id: command.kinopoisk_id,
            title: command.title,
            year: command.year,
            created_at: Utc::now(),
        };

        // The unique (user_id, kinopoisk_id) constraint decides concurrent adds;
        // the loser gets AlreadyExists from the repository.
        let created = self.repository.add(favorite).await?;

        tracing::info!(
            user_id = %identity.user_id,
            kinopoisk_id = %created.kinopoisk_id,
            "Favorite added"
        );

        Ok(created)
    }

    async fn remove_favorite(
        &self,
        identity: &Identity,
        kinopoisk_id: KinopoiskId,
    ) -> Result<Favorite, FavoriteError> {
        if self
            .repository
            .get_one(&identity.user_id, kinopoisk_id)
            .await?
            .is_none()
        {
            return Err(FavoriteError::NotFound(kinopoisk_id));
        }

        // A concurrent remove may have deleted the row since the check.
        let removed = self
            .repository
            .remove(&identity.user_id, kinopoisk_id)
            .await?
            .ok_or(FavoriteError::NotFound(kinopoisk_id))?;

        tracing::info!(
            user_id = %identity.user_id,
            kinopoisk_id = %kinopoisk_id,
            "Favorite removed"
        );

        Ok(removed)
    }

    async fn list_favorites(&self, identity: &Identity) -> Result<Vec<Favorite>, FavoriteError> {
        self.repository.list_for_user(&identity.user_id).await
    }
}
