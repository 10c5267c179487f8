pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::favorite;
pub use domain::movie;
pub use domain::user;
pub use outbound::repositories;
