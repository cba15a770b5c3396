use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    components::{html::escape, layout, live_search_input, page, PageMeta},
    error::{AppError, AppResult},
    models::RecommendationMethod,
    screens::{
        container, home_link, HomeStats, MovieBrowser, MovieDetail, RecommendationsPanel,
        SearchResults, MOVIE_RESULTS_ID, RECOMMENDATIONS_ID,
    },
};

use super::AppState;

const APP_SCRIPT: &str = include_str!("../../assets/app.js");

// Request types

/// Browse state carried in home screen links
#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    pub page: Option<u32>,
    pub search: Option<String>,
    pub selected: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    pub method: Option<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Home screen: stats, movie browser and recommendations for the selection
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<HomeParams>,
) -> Html<String> {
    let config = &state.config;
    let backend = state.backend.as_ref();
    let search = params.search.unwrap_or_default();
    let selected = params.selected;

    let mut stats = HomeStats::default();
    let mut browser = MovieBrowser::restore(
        config.browse_page_size,
        params.page.unwrap_or(1),
        &search,
        selected,
    );
    let mut panel = RecommendationsPanel::new(config.recommendation_count);

    tokio::join!(
        stats.load(backend),
        browser.load(backend),
        panel.load(backend, selected, None),
    );

    let recommendations = panel.render(|id| home_link(browser.page(), browser.search(), Some(id)));
    let body = format!(
        r#"{stats}<div class="flex flex-col md:flex-row gap-8" data-live-browse><div class="md:w-1/2"><h2 class="text-xl font-semibold mb-4">Browse Movies</h2>{search}{movies}</div><div class="md:w-1/2"><h2 class="text-xl font-semibold mb-4">Recommendations</h2>{recommendations}</div></div>"#,
        stats = stats.render(),
        search = live_search_input(browser.search()),
        movies = container(MOVIE_RESULTS_ID, &browser.render()),
        recommendations = container(RECOMMENDATIONS_ID, &recommendations),
    );

    Html(page(&PageMeta::default().with_live_session(), "", &body))
}

/// Search results for `q`
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let query = params.q.unwrap_or_default();
    let mut results = SearchResults::new(
        &query,
        params.page.unwrap_or(1),
        state.config.search_page_size,
    );
    results.load(state.backend.as_ref()).await;

    Html(page(&results.meta(), results.query(), &results.render()))
}

/// Movie details with recommendations for the chosen method
pub async fn movie_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DetailParams>,
) -> AppResult<Html<String>> {
    let movie_id: u64 = id
        .parse()
        .map_err(|_| AppError::NotFound(format!("movie {}", id)))?;

    let method = match params.method.as_deref() {
        None | Some("") => RecommendationMethod::default(),
        Some(raw) => raw.parse().map_err(AppError::InvalidInput)?,
    };

    let mut detail = MovieDetail::new(movie_id, method, state.config.recommendation_count);
    detail.load(state.backend.as_ref()).await;

    Ok(Html(page(&detail.meta(), "", &detail.render())))
}

/// Ask the backend to rebuild its dataset
pub async fn prepare(State(state): State<AppState>) -> AppResult<Html<String>> {
    let result = state.backend.prepare().await?;

    let body = format!(
        r#"<div class="prepare-result max-w-6xl mx-auto bg-white rounded-xl shadow-md p-6"><h1 class="text-2xl font-bold mb-2">Dataset preparation</h1><p>{}</p><a href="/" class="text-blue-600">Back to movies</a></div>"#,
        escape(&result.message)
    );
    Ok(Html(page(
        &PageMeta::titled("Dataset preparation", layout::DEFAULT_DESCRIPTION),
        "",
        &body,
    )))
}

/// Browser script driving the live home screen
pub async fn app_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_SCRIPT,
    )
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(layout::not_found_page()))
}
