use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::{handlers, ws, AppState};

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Pages
        .route("/", get(handlers::home))
        .route("/search", get(handlers::search))
        .route("/movie/:id", get(handlers::movie_detail))
        .route("/prepare", post(handlers::prepare))
        // Live browse session
        .route("/ws/browse", get(ws::browse_socket))
        .route("/static/app.js", get(handlers::app_script))
        .fallback(handlers::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
