use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::FavoriteData;
use crate::domain::favorite::models::AddFavoriteCommand;
use crate::domain::favorite::models::FavoriteTitle;
use crate::domain::favorite::ports::FavoriteServicePort;
use crate::domain::movie::models::KinopoiskId;
use crate::domain::user::models::Identity;
use crate::inbound::http::router::AppState;

pub async fn add_favorite(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<AddFavoriteRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<FavoriteData>, ApiError> {
    let Json(body) = payload?;
    let command = body.try_into_command()?;

    state
        .favorite_service
        .add_favorite(&identity, command)
        .await
        .map_err(ApiError::from)
        .map(|ref favorite| ApiSuccess::new(StatusCode::OK, favorite.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddFavoriteRequestBody {
    kinopoisk_id: i32,
    title: String,
    year: i32,
}

impl AddFavoriteRequestBody {
    fn try_into_command(self) -> Result<AddFavoriteCommand, ApiError> {
        let kinopoisk_id = KinopoiskId::new(self.kinopoisk_id)
            .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
        let title =
            FavoriteTitle::new(self.title).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

        Ok(AddFavoriteCommand::new(kinopoisk_id, title, self.year))
    }
}
