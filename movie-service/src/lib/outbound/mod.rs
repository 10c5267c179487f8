pub mod kinopoisk;
pub mod repositories;
