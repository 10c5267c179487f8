pub mod favorite;
pub mod user;

pub use favorite::PostgresFavoriteRepository;
pub use user::PostgresUserRepository;
