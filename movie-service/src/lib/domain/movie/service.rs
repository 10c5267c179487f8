use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::KinopoiskId;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetail;
use crate::domain::movie::models::SearchQuery;
use crate::domain::movie::ports::MovieCatalog;
use crate::domain::movie::ports::MovieServicePort;

/// Stateless pass-through to the movie catalog.
pub struct MovieService<MC>
where
    MC: MovieCatalog,
{
    catalog: Arc<MC>,
}

impl<MC> MovieService<MC>
where
    MC: MovieCatalog,
{
    pub fn new(catalog: Arc<MC>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl<MC> MovieServicePort for MovieService<MC>
where
    MC: MovieCatalog,
{
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Movie>, MovieError> {
        let movies = self.catalog.search(query).await?;

        if movies.is_empty() {
            return Err(MovieError::NoResults(query.to_string()));
        }

        Ok(movies)
    }

    async fn get_movie(&self, id: KinopoiskId) -> Result<MovieDetail, MovieError> {
        self.catalog
            .find_by_id(id)
            .await?
            .ok_or(MovieError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        pub TestMovieCatalog {}

        #[async_trait]
        impl MovieCatalog for TestMovieCatalog {
            async fn search(&self, query: &SearchQuery) -> Result<Vec<Movie>, MovieError>;
            async fn find_by_id(&self, id: KinopoiskId) -> Result<Option<MovieDetail>, MovieError>;
        }
    }

    fn movie(id: i32, title: &str) -> Movie {
        Movie {
            kinopoisk_id: KinopoiskId::new(id).unwrap(),
            title: title.to_string(),
            year: Some(1999),
            description: None,
            rating: Some(8.5),
            poster_url: None,
        }
    }

    #[tokio::test]
    async fn test_search_returns_movies() {
        let mut catalog = MockTestMovieCatalog::new();
        catalog
            .expect_search()
            .withf(|q| q.as_str() == "matrix")
            .times(1)
            .returning(|_| Ok(vec![movie(301, "Матрица")]));

        let service = MovieService::new(Arc::new(catalog));

        let query = SearchQuery::new("matrix".to_string()).unwrap();
        let movies = service.search(&query).await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].kinopoisk_id.value(), 301);
    }

    #[tokio::test]
    async fn test_search_without_results() {
        let mut catalog = MockTestMovieCatalog::new();
        catalog.expect_search().times(1).returning(|_| Ok(vec![]));

        let service = MovieService::new(Arc::new(catalog));

        let query = SearchQuery::new("zzzz".to_string()).unwrap();
        let result = service.search(&query).await;
        assert!(matches!(result, Err(MovieError::NoResults(q)) if q == "zzzz"));
    }

    #[tokio::test]
    async fn test_search_upstream_failure_propagates() {
        let mut catalog = MockTestMovieCatalog::new();
        catalog
            .expect_search()
            .times(1)
            .returning(|_| Err(MovieError::Upstream("status 500".to_string())));

        let service = MovieService::new(Arc::new(catalog));

        let query = SearchQuery::new("matrix".to_string()).unwrap();
        let result = service.search(&query).await;
        assert!(matches!(result, Err(MovieError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_get_movie_not_found() {
        let mut catalog = MockTestMovieCatalog::new();
        catalog.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = MovieService::new(Arc::new(catalog));

        let id = KinopoiskId::new(42).unwrap();
        let result = service.get_movie(id).await;
        assert!(matches!(result, Err(MovieError::NotFound(found)) if found == id));
    }
}
