use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use movie_service::config::Config;
use movie_service::domain::favorite::service::FavoriteService;
use movie_service::domain::movie::service::MovieService;
use movie_service::domain::user::service::UserService;
use movie_service::inbound::http::create_router;
use movie_service::inbound::http::AppState;
use movie_service::outbound::kinopoisk::KinopoiskClient;
use movie_service::outbound::repositories::PostgresFavoriteRepository;
use movie_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "movie-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_seconds = config.jwt.expiration_seconds,
        kinopoisk_url = %config.kinopoisk.base_url,
        "Configuration loaded"
    );

    if config.kinopoisk.api_key.is_empty() {
        tracing::warn!("KINOPOISK__API_KEY is not set; movie provider requests will be rejected");
    }

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::with_ttl(
        config.jwt.secret.as_bytes(),
        Duration::seconds(config.jwt.expiration_seconds),
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let favorite_repository = Arc::new(PostgresFavoriteRepository::new(pg_pool));
    let movie_catalog = Arc::new(KinopoiskClient::from_config(&config.kinopoisk)?);

    let state = AppState::new(
        Arc::new(UserService::new(user_repository)),
        Arc::new(FavoriteService::new(favorite_repository)),
        Arc::new(MovieService::new(movie_catalog)),
        authenticator,
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    tracing::info!("Server exited");

    Ok(())
}
