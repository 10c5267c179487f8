use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::FavoriteData;
use crate::domain::favorite::ports::FavoriteServicePort;
use crate::domain::movie::models::KinopoiskId;
use crate::domain::user::models::Identity;
use crate::inbound::http::router::AppState;

pub async fn remove_favorite(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<ApiSuccess<FavoriteData>, ApiError> {
    let Path(kinopoisk_id) = path?;
    let kinopoisk_id =
        KinopoiskId::new(kinopoisk_id).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .favorite_service
        .remove_favorite(&identity, kinopoisk_id)
        .await
        .map_err(ApiError::from)
        .map(|ref favorite| ApiSuccess::new(StatusCode::OK, favorite.into()))
}
