//! Page shell shared by every full-page response.

use chrono::{Datelike, Utc};

use super::{controls::search_bar, feedback::error_banner, html::escape};

pub const APP_NAME: &str = "MovieMatch";
pub const DEFAULT_TITLE: &str = "MovieMatch - Movie Recommendation System";
pub const DEFAULT_DESCRIPTION: &str =
    "Find your next favorite movie with intelligent recommendations powered by collaborative filtering and content-based analysis.";

/// Head metadata of a page
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Attach the live session script
    pub live: bool,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            live: false,
        }
    }
}

impl PageMeta {
    /// `"{prefix} - MovieMatch"`
    pub fn titled(prefix: &str, description: &str) -> Self {
        Self {
            title: format!("{} - {}", prefix, APP_NAME),
            description: description.to_string(),
            live: false,
        }
    }

    pub fn with_live_session(mut self) -> Self {
        self.live = true;
        self
    }
}

fn header(search_query: &str) -> String {
    format!(
        r#"<header class="flex flex-col md:flex-row justify-between items-center mb-8"><a href="/" class="text-3xl font-bold text-purple-800">{}</a>{}</header>"#,
        APP_NAME,
        search_bar(search_query)
    )
}

fn footer() -> String {
    format!(
        r#"<footer class="mt-16 pt-8 border-t text-center text-gray-500 text-sm"><p>{} - Movie Recommendation System © {}</p><p class="mt-2">Using MovieLens dataset - <a href="https://grouplens.org/datasets/movielens/" class="text-blue-500" rel="noopener noreferrer" target="_blank">GroupLens Research</a></p></footer>"#,
        APP_NAME,
        Utc::now().year()
    )
}

/// Wraps `body` in the full HTML document
pub fn page(meta: &PageMeta, search_query: &str, body: &str) -> String {
    let script = if meta.live {
        r#"<script src="/static/app.js" defer></script>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{title}</title><meta name="description" content="{description}"><link href="https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css" rel="stylesheet">{script}</head><body class="bg-gray-50"><main class="container mx-auto px-4 py-8">{header}{body}{footer}</main></body></html>"#,
        title = escape(&meta.title),
        description = escape(&meta.description),
        script = script,
        header = header(search_query),
        body = body,
        footer = footer(),
    )
}

pub fn not_found_page() -> String {
    let body = r#"<div class="not-found flex flex-col items-center justify-center py-20"><h1 class="text-3xl font-bold">404 - Page Not Found</h1><p class="mb-4">The page you're looking for doesn't exist.</p><a href="/" class="text-blue-600">Go back home</a></div>"#;
    page(
        &PageMeta::titled("Page Not Found", DEFAULT_DESCRIPTION),
        "",
        body,
    )
}

pub fn error_page(message: &str) -> String {
    page(
        &PageMeta::titled("Error", DEFAULT_DESCRIPTION),
        "",
        &format!(r#"<div class="max-w-6xl mx-auto">{}</div>"#, error_banner(message)),
    )
}
