//! Provider payloads and their mapping onto domain movies.
//!
//! The provider is inconsistent about types: `year` and `rating` arrive as
//! numbers, numeric strings, the literal string `"null"` or not at all, so
//! both are kept as raw JSON values and parsed leniently.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::movie::models::KinopoiskId;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetail;

pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Body of `GET /api/v2.1/films/search-by-keyword`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub films: Vec<FilmSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmSummary {
    pub film_id: i32,
    pub name_ru: Option<String>,
    #[serde(default)]
    pub year: Value,
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Value,
    pub poster_url: Option<String>,
}

/// Body of `GET /api/v2.2/films/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmDetails {
    pub kinopoisk_id: i32,
    pub name_ru: Option<String>,
    pub name_original: Option<String>,
    #[serde(default)]
    pub year: Value,
    pub description: Option<String>,
    #[serde(default)]
    pub rating_kinopoisk: Value,
    #[serde(default)]
    pub rating: Value,
    pub poster_url: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub countries: Vec<Country>,
    pub director: Option<String>,
    #[serde(default)]
    pub actors: Vec<String>,
    pub film_length: Option<i32>,
    pub duration: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct Genre {
    pub genre: String,
}

#[derive(Debug, Deserialize)]
pub struct Country {
    pub country: String,
}

pub fn parse_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn parse_rating(value: &Value) -> Option<f64> {
    let rating = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    rating.filter(|r| r.is_finite())
}

impl FilmSummary {
    /// `None` when the provider returned an unusable identifier.
    pub fn into_movie(self) -> Option<Movie> {
        let kinopoisk_id = KinopoiskId::new(self.film_id).ok()?;

        Some(Movie {
            kinopoisk_id,
            title: self.name_ru.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            year: parse_year(&self.year),
            description: self.description,
            rating: parse_rating(&self.rating),
            poster_url: self.poster_url,
        })
    }
}

impl FilmDetails {
    pub fn into_movie_detail(self) -> Option<MovieDetail> {
        let kinopoisk_id = KinopoiskId::new(self.kinopoisk_id).ok()?;
        let rating = parse_rating(&self.rating_kinopoisk).or_else(|| parse_rating(&self.rating));

        Some(MovieDetail {
            kinopoisk_id,
            title: self
                .name_ru
                .or(self.name_original)
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            year: parse_year(&self.year),
            description: self.description,
            rating,
            poster_url: self.poster_url,
            countries: self.countries.into_iter().map(|c| c.country).collect(),
            genres: self.genres.into_iter().map(|g| g.genre).collect(),
            director: self.director,
            actors: self.actors,
            duration: self.film_length.or(self.duration),
        })
    }
}
