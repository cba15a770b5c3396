/// HTTP client for the recommendation backend
///
/// Endpoints (all GET, relative to `{api_url}{api_prefix}`):
/// - `/movies?page=&limit=&search=` → one catalog page
/// - `/recommend?movie_id=&count=&method=` → recommendations for a movie
/// - `/stats` → dataset statistics
/// - `/prepare` → dataset preparation
use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    models::{DatasetStats, MoviePage, PrepareResult, RecommendationSet},
    services::backend::{MovieBackend, MovieQuery, RecommendationQuery},
};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Clone)]
pub struct HttpBackend {
    http_client: HttpClient,
    /// Base URL with the path prefix already applied, no trailing slash
    api_url: String,
}

impl HttpBackend {
    /// Creates a client for the backend at `api_url`, with endpoints under `api_prefix`
    pub fn new(api_url: &str, api_prefix: &str, timeout: Duration) -> ApiResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url: join_url(api_url, api_prefix),
        })
    }

    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(
            &config.api_url,
            &config.api_prefix,
            config.request_timeout(),
        )
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, params = ?params, "Calling recommendation backend");

        let response = self.http_client.get(&url).query(params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(url = %url, status = status.as_u16(), "Backend returned error status");
            return Err(ApiError::from_status(status));
        }

        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                url = %url,
                response = %response_text,
                "Failed to deserialize backend response"
            );
            ApiError::Decode(e.to_string())
        })
    }
}

/// Joins base URL and prefix so that exactly one slash separates them
fn join_url(api_url: &str, api_prefix: &str) -> String {
    let base = api_url.trim_end_matches('/');
    let prefix = api_prefix.trim_matches('/');
    if prefix.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, prefix)
    }
}

fn movie_params(query: &MovieQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("page", query.page.to_string()),
        ("limit", query.limit.to_string()),
    ];
    if let Some(search) = &query.search {
        params.push(("search", search.clone()));
    }
    params
}

fn recommendation_params(query: &RecommendationQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("movie_id", query.movie_id.to_string()),
        ("count", query.count.to_string()),
    ];
    if let Some(method) = query.method {
        params.push(("method", method.as_str().to_string()));
    }
    params
}

#[async_trait::async_trait]
impl MovieBackend for HttpBackend {
    async fn list_movies(&self, query: MovieQuery) -> ApiResult<MoviePage> {
        let page: MoviePage = self.get_json("movies", &movie_params(&query)).await?;

        tracing::info!(
            page = page.page,
            total = page.total,
            returned = page.movies.len(),
            search = ?query.search,
            "Movie page fetched"
        );

        Ok(page)
    }

    async fn recommendations(&self, query: RecommendationQuery) -> ApiResult<RecommendationSet> {
        let set: RecommendationSet = self
            .get_json("recommend", &recommendation_params(&query))
            .await?;

        tracing::info!(
            movie_id = query.movie_id,
            method = %set.method,
            returned = set.recommendations.len(),
            "Recommendations fetched"
        );

        Ok(set)
    }

    async fn stats(&self) -> ApiResult<DatasetStats> {
        self.get_json("stats", &[]).await
    }

    async fn prepare(&self) -> ApiResult<PrepareResult> {
        let result: PrepareResult = self.get_json("prepare", &[]).await?;
        tracing::info!(message = %result.message, "Backend dataset preparation triggered");
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
