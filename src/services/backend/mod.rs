/// Recommendation backend abstraction
///
/// Every screen reaches the external recommendation service through the
/// `MovieBackend` trait. The production implementation talks HTTP; tests drive
/// screens and routes with mocks or in-process stubs.
use crate::{
    error::ApiResult,
    models::{DatasetStats, MoviePage, PrepareResult, RecommendationMethod, RecommendationSet},
};

pub mod http;

pub use http::HttpBackend;

/// Parameters for one page of the movie catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    pub page: u32,
    pub limit: u32,
    /// Only present when the user typed something other than whitespace
    pub search: Option<String>,
}

impl MovieQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit,
            search: None,
        }
    }

    /// Attaches a search filter; blank text leaves the query unfiltered
    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }
}

/// Parameters for a recommendation lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationQuery {
    pub movie_id: u64,
    pub count: u32,
    /// `None` lets the backend pick its default method
    pub method: Option<RecommendationMethod>,
}

impl RecommendationQuery {
    pub fn new(movie_id: u64, count: u32) -> Self {
        Self {
            movie_id,
            count,
            method: None,
        }
    }

    pub fn with_method(mut self, method: RecommendationMethod) -> Self {
        self.method = Some(method);
        self
    }
}

/// The four read endpoints of the recommendation backend
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieBackend: Send + Sync {
    /// List or search the movie catalog, one page at a time
    async fn list_movies(&self, query: MovieQuery) -> ApiResult<MoviePage>;

    /// Recommendations for one movie
    async fn recommendations(&self, query: RecommendationQuery) -> ApiResult<RecommendationSet>;

    /// Dataset statistics
    async fn stats(&self) -> ApiResult<DatasetStats>;

    /// Ask the backend to (re)build its dataset
    async fn prepare(&self) -> ApiResult<PrepareResult>;

    /// Backend name for logging and debugging
    fn name(&self) -> &'static str;
}
