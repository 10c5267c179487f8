use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::models::Favorite;
use crate::domain::favorite::models::FavoriteId;
use crate::domain::favorite::models::FavoriteTitle;
use crate::domain::favorite::ports::FavoriteRepository;
use crate::domain::movie::models::KinopoiskId;
use crate::domain::user::models::UserId;

pub struct PostgresFavoriteRepository {
    pool: PgPool,
}

impl PostgresFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_favorite(row: &PgRow) -> Result<Favorite, FavoriteError> {
        let kinopoisk_id: i32 = row.try_get("kinopoisk_id").map_err(database_error)?;
        let title: String = row.try_get("title").map_err(database_error)?;

        Ok(Favorite {
            id: FavoriteId(row.try_get("id").map_err(database_error)?),
            user_id: UserId(row.try_get("user_id").map_err(database_error)?),
            kinopoisk_id: KinopoiskId::new(kinopoisk_id)?,
            title: FavoriteTitle::new(title)?,
            year: row.try_get("year").map_err(database_error)?,
            created_at: row.try_get("created_at").map_err(database_error)?,
        })
    }
}

fn database_error(e: sqlx::Error) -> FavoriteError {
    FavoriteError::DatabaseError(e.to_string())
}

#[async_trait]
impl FavoriteRepository for PostgresFavoriteRepository {
    async fn add(&self, favorite: Favorite) -> Result<Favorite, FavoriteError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        sqlx::query(
            r#"
            INSERT INTO favorites (id, user_id, kinopoisk_id, title, year, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(favorite.id.as_uuid())
        .bind(favorite.user_id.as_uuid())
        .bind(favorite.kinopoisk_id.value())
        .bind(favorite.title.as_str())
        .bind(favorite.year)
        .bind(favorite.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return FavoriteError::AlreadyExists(favorite.kinopoisk_id);
                }
                if db_err.is_foreign_key_violation() {
                    return FavoriteError::OwnerNotFound(favorite.user_id);
                }
            }
            database_error(e)
        })?;

        tx.commit().await.map_err(database_error)?;

        Ok(favorite)
    }

    async fn remove(
        &self,
        user_id: &UserId,
        kinopoisk_id: KinopoiskId,
    ) -> Result<Option<Favorite>, FavoriteError> {
        let row = sqlx::query(
            r#"
            DELETE FROM favorites
            WHERE user_id = $1 AND kinopoisk_id = $2
            RETURNING id, user_id, kinopoisk_id, title, year, created_at
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(kinopoisk_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        if row.is_none() {
            tracing::debug!(
                user_id = %user_id,
                kinopoisk_id = %kinopoisk_id,
                "No favorite to delete"
            );
        }

        row.as_ref().map(Self::row_to_favorite).transpose()
    }

    async fn get_one(
        &self,
        user_id: &UserId,
        kinopoisk_id: KinopoiskId,
    ) -> Result<Option<Favorite>, FavoriteError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, kinopoisk_id, title, year, created_at
            FROM favorites
            WHERE user_id = $1 AND kinopoisk_id = $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(kinopoisk_id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_favorite).transpose()
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, FavoriteError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, kinopoisk_id, title, year, created_at
            FROM favorites
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_favorite).collect()
    }
}
