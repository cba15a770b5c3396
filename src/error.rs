use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::components::layout;

/// Failure talking to the recommendation backend
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The backend answered with a non-success status
    #[error("API error: {status} {text}")]
    Status { status: u16, text: String },

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid API response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-success status, using the canonical reason as text
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        ApiError::Status {
            status: status.as_u16(),
            text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Application-level errors surfaced by page handlers
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Backend(#[from] ApiError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Backend(_) => StatusCode::BAD_GATEWAY,
        };

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(error = %self, "Rendering not found page");
            return (status, Html(layout::not_found_page())).into_response();
        }

        tracing::warn!(error = %self, status = status.as_u16(), "Request failed");
        (status, Html(layout::error_page(&self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
