use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MovieData;
use crate::domain::movie::models::SearchQuery;
use crate::domain::movie::ports::MovieServicePort;
use crate::inbound::http::router::AppState;

pub async fn search_movies(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<ApiSuccess<Vec<MovieData>>, ApiError> {
    let Query(params) = params?;
    let query =
        SearchQuery::new(params.query).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let movies = state.movie_service.search(&query).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        movies.iter().map(MovieData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchParams {
    query: String,
}
