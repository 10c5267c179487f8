use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::models::KinopoiskId;
use crate::domain::movie::models::Movie;
use crate::domain::movie::models::MovieDetail;
use crate::domain::movie::models::SearchQuery;

/// Port for movie lookup operations exposed to the HTTP layer.
#[async_trait]
pub trait MovieServicePort: Send + Sync + 'static {
    /// Search the catalog by keyword.
    ///
    /// # Errors
    /// * `NoResults` - Provider found nothing
    /// * `Upstream` - Provider failure
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Movie>, MovieError>;

    /// Fetch the full card of a movie.
    ///
    /// # Errors
    /// * `NotFound` - Provider does not know the identifier
    /// * `Upstream` - Provider failure
    async fn get_movie(&self, id: KinopoiskId) -> Result<MovieDetail, MovieError>;
}

/// External movie catalog.
#[async_trait]
pub trait MovieCatalog: Send + Sync + 'static {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Movie>, MovieError>;

    /// `None` when the provider has no such movie.
    async fn find_by_id(&self, id: KinopoiskId) -> Result<Option<MovieDetail>, MovieError>;
}
