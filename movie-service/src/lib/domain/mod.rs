pub mod favorite;
pub mod movie;
pub mod user;
