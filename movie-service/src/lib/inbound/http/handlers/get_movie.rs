use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::MovieDetailData;
use crate::domain::movie::models::KinopoiskId;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_movie(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<ApiSuccess<MovieDetailData>, ApiError> {
    let Path(kinopoisk_id) = path?;
    let kinopoisk_id =
        KinopoiskId::new(kinopoisk_id).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .movie_service
        .get_movie(kinopoisk_id)
        .await
        .map_err(ApiError::from)
        .map(|ref movie| ApiSuccess::new(StatusCode::OK, movie.into()))
}
