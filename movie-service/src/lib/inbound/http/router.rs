use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::add_favorite::add_favorite;
use super::handlers::get_movie::get_movie;
use super::handlers::get_profile::get_profile;
use super::handlers::list_favorites::list_favorites;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::remove_favorite::remove_favorite;
use super::handlers::search_movies::search_movies;
use super::middleware::authenticate as auth_middleware;
use crate::domain::favorite::ports::FavoriteServicePort;
use crate::domain::movie::ports::MovieServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub favorite_service: Arc<dyn FavoriteServicePort>,
    pub movie_service: Arc<dyn MovieServicePort>,
    pub authenticator: Arc<Authenticator>,
}

impl AppState {
    pub fn new(
        user_service: Arc<dyn UserServicePort>,
        favorite_service: Arc<dyn FavoriteServicePort>,
        movie_service: Arc<dyn MovieServicePort>,
        authenticator: Arc<Authenticator>,
    ) -> Self {
        Self {
            user_service,
            favorite_service,
            movie_service,
            authenticator,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/profile", get(get_profile))
        .route("/search", get(search_movies))
        .route("/movies/:kinopoisk_id", get(get_movie))
        .route("/movies/favorites", post(add_favorite))
        .route("/movies/favorites/:kinopoisk_id", delete(remove_favorite))
        .route("/favorites", get(list_favorites))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
