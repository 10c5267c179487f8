use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::rejection::QueryRejection;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::models::Favorite;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetail;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;

pub mod add_favorite;
pub mod get_movie;
pub mod get_profile;
pub mod list_favorites;
pub mod login;
pub mod register;
pub mod remove_favorite;
pub mod search_movies;

const INTERNAL_ERROR_DETAIL: &str = "Internal server error";

/// Successful response; the payload is serialized as the body as is.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// Error returned to clients as `{"detail": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({ "detail": message }));

        if status == StatusCode::UNAUTHORIZED {
            return (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response();
        }

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::UnprocessableEntity(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::UsernameAlreadyExists(_) => {
                ApiError::BadRequest("Username already registered".to_string())
            }
            UserError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            UserError::NotFound(_) => ApiError::NotFound("User not found".to_string()),
            UserError::InvalidUsername(_) | UserError::InvalidUserId(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::Password(_) | UserError::DatabaseError(_) | UserError::Unknown(_) => {
                tracing::error!(error = %err, "User operation failed");
                ApiError::InternalServerError(INTERNAL_ERROR_DETAIL.to_string())
            }
        }
    }
}

impl From<FavoriteError> for ApiError {
    fn from(err: FavoriteError) -> Self {
        match err {
            FavoriteError::AlreadyExists(_) => {
                ApiError::BadRequest("Movie already in favorites".to_string())
            }
            FavoriteError::NotFound(_) => {
                ApiError::NotFound("Movie not found in favorites".to_string())
            }
            FavoriteError::OwnerNotFound(_) => ApiError::NotFound("User not found".to_string()),
            FavoriteError::InvalidKinopoiskId(_) | FavoriteError::InvalidTitle(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            FavoriteError::DatabaseError(_) | FavoriteError::Unknown(_) => {
                tracing::error!(error = %err, "Favorite operation failed");
                ApiError::InternalServerError(INTERNAL_ERROR_DETAIL.to_string())
            }
        }
    }
}

impl From<MovieError> for ApiError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NoResults(_) => {
                ApiError::NotFound("No films found for the given query".to_string())
            }
            MovieError::NotFound(_) => ApiError::NotFound("Film not found".to_string()),
            MovieError::InvalidKinopoiskId(_) | MovieError::InvalidQuery(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            MovieError::Upstream(_) => {
                tracing::error!(error = %err, "Movie provider failure");
                ApiError::InternalServerError(
                    "Failed to fetch data from Kinopoisk API".to_string(),
                )
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteData {
    pub id: String,
    pub kinopoisk_id: i32,
    pub title: String,
    pub year: i32,
}

impl From<&Favorite> for FavoriteData {
    fn from(favorite: &Favorite) -> Self {
        Self {
            id: favorite.id.to_string(),
            kinopoisk_id: favorite.kinopoisk_id.value(),
            title: favorite.title.as_str().to_string(),
            year: favorite.year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieData {
    pub kinopoisk_id: i32,
    pub title: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
}

impl From<&Movie> for MovieData {
    fn from(movie: &Movie) -> Self {
        Self {
            kinopoisk_id: movie.kinopoisk_id.value(),
            title: movie.title.clone(),
            year: movie.year,
            description: movie.description.clone(),
            rating: movie.rating,
            poster_url: movie.poster_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDetailData {
    pub kinopoisk_id: i32,
    pub title: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
    pub countries: Vec<String>,
    pub genres: Vec<String>,
    pub director: Option<String>,
    pub actors: Vec<String>,
    pub duration: Option<i32>,
}

impl From<&MovieDetail> for MovieDetailData {
    fn from(movie: &MovieDetail) -> Self {
        Self {
            kinopoisk_id: movie.kinopoisk_id.value(),
            title: movie.title.clone(),
            year: movie.year,
            description: movie.description.clone(),
            rating: movie.rating,
            poster_url: movie.poster_url.clone(),
            countries: movie.countries.clone(),
            genres: movie.genres.clone(),
            director: movie.director.clone(),
            actors: movie.actors.clone(),
            duration: movie.duration,
        }
    }
}
