use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::KinopoiskConfig;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::KinopoiskId;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetail;
use crate::domain::movie::models::SearchQuery;
use crate::domain::movie::ports::MovieCatalog;
use crate::outbound::kinopoisk::messages::FilmDetails;
use crate::outbound::kinopoisk::messages::FilmSummary;
use crate::outbound::kinopoisk::messages::SearchResponse;

const API_KEY_HEADER: &str = "X-API-KEY";

/// HTTP client for the Kinopoisk unofficial API
#[derive(Clone)]
pub struct KinopoiskClient {
    client: reqwest::Client,
    base_url: Arc<str>,
    api_key: Arc<str>,
}

impl KinopoiskClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: Arc::from(base_url.trim_end_matches('/')),
            api_key: Arc::from(api_key),
        })
    }

    pub fn from_config(config: &KinopoiskConfig) -> Result<Self, reqwest::Error> {
        Self::new(
            &config.base_url,
            &config.api_key,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<reqwest::Response, MovieError> {
        tracing::debug!(url = %url, ?query, "Requesting movie provider");

        let response = self
            .client
            .get(url)
            .query(query)
            .header(API_KEY_HEADER, self.api_key.as_ref())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "Movie provider request failed");
                MovieError::Upstream(e.to_string())
            })?;

        tracing::debug!(url = %url, status = %response.status(), "Movie provider responded");

        Ok(response)
    }

    async fn upstream_failure(url: &str, response: reqwest::Response) -> MovieError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read body".to_string());

        tracing::error!(url = %url, status = %status, body = %body, "Movie provider returned an error");

        MovieError::Upstream(format!("provider responded with status {}", status))
    }
}

#[async_trait]
impl MovieCatalog for KinopoiskClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Movie>, MovieError> {
        let url = format!("{}/api/v2.1/films/search-by-keyword", self.base_url);
        let response = self.get(&url, &[("keyword", query.as_str())]).await?;

        if response.status() != StatusCode::OK {
            return Err(Self::upstream_failure(&url, response).await);
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Failed to parse search response");
            MovieError::Upstream(e.to_string())
        })?;

        Ok(body
            .films
            .into_iter()
            .filter_map(FilmSummary::into_movie)
            .collect())
    }

    async fn find_by_id(&self, id: KinopoiskId) -> Result<Option<MovieDetail>, MovieError> {
        let url = format!("{}/api/v2.2/films/{}", self.base_url, id);
        let response = self.get(&url, &[]).await?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Ok(None),
            _ => return Err(Self::upstream_failure(&url, response).await),
        }

        let body: FilmDetails = response.json().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "Failed to parse film details");
            MovieError::Upstream(e.to_string())
        })?;

        Ok(body.into_movie_detail())
    }
}
