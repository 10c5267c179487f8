use std::fmt;

use crate::domain::movie::errors::KinopoiskIdError;
use crate::domain::movie::errors::SearchQueryError;

/// Movie identifier in the Kinopoisk catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KinopoiskId(i32);

impl KinopoiskId {
    /// # Errors
    /// * `NotPositive` - Identifier is zero or negative
    pub fn new(id: i32) -> Result<Self, KinopoiskIdError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(KinopoiskIdError::NotPositive(id))
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for KinopoiskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Keyword search text, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(query: String) -> Result<Self, SearchQueryError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(SearchQueryError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Search result summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub kinopoisk_id: KinopoiskId,
    pub title: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
}

/// Full movie card.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    pub kinopoisk_id: KinopoiskId,
    pub title: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
    pub countries: Vec<String>,
    pub genres: Vec<String>,
    pub director: Option<String>,
    pub actors: Vec<String>,
    /// Running time in minutes
    pub duration: Option<i32>,
}
