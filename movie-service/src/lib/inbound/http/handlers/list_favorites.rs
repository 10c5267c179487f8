use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::FavoriteData;
use crate::domain::favorite::ports::FavoriteServicePort;
use crate::domain::user::models::Identity;
use crate::inbound::http::router::AppState;

pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<Vec<FavoriteData>>, ApiError> {
    let favorites = state.favorite_service.list_favorites(&identity).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        favorites.iter().map(FavoriteData::from).collect(),
    ))
}
