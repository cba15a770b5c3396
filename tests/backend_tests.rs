mod common;

use std::time::Duration;

use axum::http::StatusCode;
use tokio_test::{assert_err, assert_ok};

use common::{StubApi, StubMode, API_PREFIX};
use moviematch_web::{
    error::ApiError,
    models::RecommendationMethod,
    services::{
        backend::{MovieQuery, RecommendationQuery},
        HttpBackend, MovieBackend,
    },
};

#[tokio::test]
async fn test_list_movies_sends_paging_and_search() {
    let stub = StubApi::start().await;
    let backend = stub.backend();

    let page = assert_ok!(backend.list_movies(MovieQuery::new(2, 5)).await);
    assert_eq!(page.total, 30);
    assert_eq!(page.page, 2);
    assert_eq!(page.movies.len(), 5);
    assert_eq!(page.movies[0].id, 6);
    assert_eq!(page.total_pages(), 6);

    let page = assert_ok!(
        backend
            .list_movies(MovieQuery::new(1, 12).with_search("  the matrix "))
            .await
    );
    assert_eq!(page.total, 1);
    assert_eq!(page.movies[0].year.as_deref(), Some("1999"));

    assert_eq!(
        stub.requests(),
        vec![
            "/api/v1/movies?page=2&limit=5",
            "/api/v1/movies?page=1&limit=12&search=the+matrix",
        ]
    );
}

#[tokio::test]
async fn test_recommendations_with_and_without_method() {
    let stub = StubApi::start().await;
    let backend = stub.backend();

    let query = RecommendationQuery::new(2, 3);
    let set = assert_ok!(backend.recommendations(query).await);
    assert_eq!(set.base_movie.title, "Toy Story (1995)");
    assert_eq!(set.base_movie.year.as_deref(), Some("1995"));
    assert_eq!(set.recommendations.len(), 3);
    assert_eq!(set.method, RecommendationMethod::Hybrid);
    assert!(set.recommendations.iter().all(|r| r.movie.id != 2));
    assert_eq!(set.recommendations[0].explanation, "Because you picked movie 2");

    let set = assert_ok!(
        backend
            .recommendations(
                RecommendationQuery::new(2, 3).with_method(RecommendationMethod::Content)
            )
            .await
    );
    assert_eq!(set.method, RecommendationMethod::Content);

    assert_eq!(
        stub.requests(),
        vec![
            "/api/v1/recommend?movie_id=2&count=3",
            "/api/v1/recommend?movie_id=2&count=3&method=content",
        ]
    );
}

#[tokio::test]
async fn test_stats_and_prepare() {
    let stub = StubApi::start().await;
    let backend = stub.backend();

    let stats = assert_ok!(backend.stats().await);
    assert_eq!(stats.total_movies, 9742);
    assert_eq!(stats.unique_genres, 20);

    let result = assert_ok!(backend.prepare().await);
    assert_eq!(result.message, "Dataset prepared successfully");

    assert_eq!(stub.requests(), vec!["/api/v1/stats", "/api/v1/prepare"]);
}

#[tokio::test]
async fn test_error_status_becomes_api_error() {
    let stub = StubApi::start_with(StubMode::Failing(StatusCode::SERVICE_UNAVAILABLE)).await;
    let backend = stub.backend();

    let err = assert_err!(backend.list_movies(MovieQuery::new(1, 12)).await);

    assert!(matches!(err, ApiError::Status { status: 503, .. }));
    assert_eq!(err.to_string(), "API error: 503 Service Unavailable");
}

#[tokio::test]
async fn test_missing_movie_is_not_found() {
    let stub = StubApi::start().await;
    let backend = stub.backend();

    let query = RecommendationQuery::new(404, 6);
    let err = assert_err!(backend.recommendations(query).await);

    assert_eq!(err.to_string(), "API error: 404 Not Found");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let stub = StubApi::start_with(StubMode::Malformed).await;
    let backend = stub.backend();

    let err = assert_err!(backend.stats().await);

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(
        &format!("http://{}", addr),
        API_PREFIX,
        Duration::from_secs(2),
    )
    .unwrap();

    let err = assert_err!(backend.stats().await);

    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.to_string().starts_with("API request failed"));
}

#[tokio::test]
async fn test_prefix_slashes_are_normalized() {
    let stub = StubApi::start().await;
    let backend = HttpBackend::new(
        &format!("{}/", stub.base_url),
        "api/v1/",
        Duration::from_secs(5),
    )
    .unwrap();

    assert_ok!(backend.stats().await);
    assert_eq!(stub.requests(), vec!["/api/v1/stats"]);
}
