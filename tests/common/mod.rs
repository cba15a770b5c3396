//! Stand-in for the recommendation backend used by the integration tests.
//!
//! The stub serves a fixed catalog of 30 movies on `127.0.0.1:0` and records
//! every request it receives, so tests can assert on the query strings the
//! front end produced.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_test::{TestServer, TestServerConfig, Transport};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::oneshot};

use moviematch_web::{
    api::{create_router, AppState},
    config::Config,
    services::HttpBackend,
};

pub const CATALOG_SIZE: u64 = 30;
pub const API_PREFIX: &str = "/api/v1";

/// How the stub answers every endpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StubMode {
    Healthy,
    Failing(StatusCode),
    Malformed,
}

#[derive(Clone)]
struct StubState {
    mode: StubMode,
    requests: Arc<Mutex<Vec<String>>>,
}

pub struct StubApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    _shutdown_tx: Option<oneshot::Sender<()>>,
}

impl StubApi {
    pub async fn start() -> Self {
        Self::start_with(StubMode::Healthy).await
    }

    pub async fn start_with(mode: StubMode) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub backend");
        let addr: SocketAddr = listener.local_addr().expect("Failed to read stub address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let state = StubState {
            mode,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route(&format!("{}/movies", API_PREFIX), get(movies))
            .route(&format!("{}/recommend", API_PREFIX), get(recommend))
            .route(&format!("{}/stats", API_PREFIX), get(stats))
            .route(&format!("{}/prepare", API_PREFIX), get(prepare))
            .with_state(state);

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Stub backend failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Requests received so far, as `path?query`
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests whose path ends with `endpoint`
    pub fn requests_to(&self, endpoint: &str) -> Vec<String> {
        let suffix = format!("{}/{}", API_PREFIX, endpoint);
        self.requests()
            .into_iter()
            .filter(|r| r.split('?').next() == Some(suffix.as_str()))
            .collect()
    }

    pub fn backend(&self) -> HttpBackend {
        HttpBackend::new(&self.base_url, API_PREFIX, Duration::from_secs(5))
            .expect("Failed to build backend client")
    }

    pub fn config(&self) -> Config {
        Config {
            api_url: self.base_url.clone(),
            api_prefix: API_PREFIX.to_string(),
            request_timeout_secs: 5,
            search_debounce_ms: 10,
            ..Config::default()
        }
    }
}

/// Front end wired to `stub` through the real HTTP client
pub fn test_server(stub: &StubApi) -> TestServer {
    let config = stub.config();
    let backend = HttpBackend::from_config(&config).expect("Failed to build backend client");
    let app = create_router(AppState::new(Arc::new(backend), config));
    TestServer::new(app).unwrap()
}

/// Like [`test_server`] but over a real socket, as WebSocket upgrades need
pub fn live_test_server(stub: &StubApi) -> TestServer {
    let config = stub.config();
    let backend = HttpBackend::from_config(&config).expect("Failed to build backend client");
    let app = create_router(AppState::new(Arc::new(backend), config));
    let server_config = TestServerConfig {
        transport: Some(Transport::HttpRandomPort),
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(app, server_config).unwrap()
}

pub fn movie(id: u64) -> Value {
    let (title, year) = match id {
        1 => ("The Matrix (1999)".to_string(), json!("1999")),
        2 => ("Toy Story (1995)".to_string(), json!(1995)),
        n => (format!("Movie {}", n), Value::Null),
    };
    json!({
        "id": id,
        "title": title,
        "genres": ["Action", "Sci-Fi", "Drama", "Thriller"],
        "year": year,
    })
}

fn record(state: &StubState, uri: &Uri) -> Option<Response> {
    state.requests.lock().unwrap().push(uri.to_string());
    match state.mode {
        StubMode::Healthy => None,
        StubMode::Failing(status) => Some(status.into_response()),
        StubMode::Malformed => Some((StatusCode::OK, "{\"unexpected\":").into_response()),
    }
}

fn number(params: &HashMap<String, String>, key: &str, default: u64) -> u64 {
    params
        .get(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

async fn movies(
    State(state): State<StubState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(response) = record(&state, &uri) {
        return response;
    }

    let search = params.get("search").map(|s| s.to_lowercase());
    let matching: Vec<Value> = (1..=CATALOG_SIZE)
        .map(movie)
        .filter(|m| match &search {
            Some(s) => m["title"]
                .as_str()
                .is_some_and(|title| title.to_lowercase().contains(s)),
            None => true,
        })
        .collect();

    let page = number(&params, "page", 1).max(1);
    let limit = number(&params, "limit", 12);
    let start = ((page - 1) * limit) as usize;
    let movies: Vec<Value> = matching
        .iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect();

    Json(json!({
        "total": matching.len(),
        "page": page,
        "limit": limit,
        "movies": movies,
    }))
    .into_response()
}

async fn recommend(
    State(state): State<StubState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(response) = record(&state, &uri) {
        return response;
    }

    let movie_id = number(&params, "movie_id", 0);
    if movie_id == 0 || movie_id > CATALOG_SIZE {
        return StatusCode::NOT_FOUND.into_response();
    }
    let count = number(&params, "count", 6) as usize;
    let method = params
        .get("method")
        .cloned()
        .unwrap_or_else(|| "hybrid".to_string());

    let recommendations: Vec<Value> = (1..=CATALOG_SIZE)
        .filter(|id| *id != movie_id)
        .take(count)
        .map(|id| {
            let mut rec = movie(id);
            rec["explanation"] = json!(format!("Because you picked movie {}", movie_id));
            rec
        })
        .collect();

    Json(json!({
        "baseMovie": movie(movie_id),
        "recommendations": recommendations,
        "method": method,
    }))
    .into_response()
}

async fn stats(State(state): State<StubState>, uri: Uri) -> Response {
    if let Some(response) = record(&state, &uri) {
        return response;
    }
    Json(json!({
        "totalMovies": 9742,
        "totalUsers": 610,
        "totalRatings": 100836,
        "avgRating": 3.5,
        "uniqueGenres": 20,
    }))
    .into_response()
}

async fn prepare(State(state): State<StubState>, uri: Uri) -> Response {
    if let Some(response) = record(&state, &uri) {
        return response;
    }
    Json(json!({ "message": "Dataset prepared successfully" })).into_response()
}
