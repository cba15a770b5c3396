use crate::{
    components::{
        error_banner,
        html::{escape, href},
        movie_card, pagination, spinner, PageMeta, SpinnerSize,
    },
    error::ApiResult,
    models::{total_pages, Movie, MoviePage},
    services::backend::{MovieBackend, MovieQuery},
};

use super::movie_link;

/// Results page for a search query
#[derive(Debug, Clone)]
pub struct SearchResults {
    query: String,
    page: u32,
    page_size: u32,
    total_results: u64,
    movies: Vec<Movie>,
    loading: bool,
    error: Option<String>,
}

impl SearchResults {
    pub fn new(query: &str, page: u32, page_size: u32) -> Self {
        Self {
            query: query.trim().to_string(),
            page: page.max(1),
            page_size,
            total_results: 0,
            movies: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total_results, self.page_size)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn finish_load(&mut self, result: ApiResult<MoviePage>) {
        self.loading = false;
        match result {
            Ok(page) => {
                self.total_results = page.total;
                self.movies = page.movies;
            }
            Err(e) => {
                tracing::warn!(error = %e, query = %self.query, "Search failed");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Runs the search. A blank query shows the prompt without calling the backend.
    pub async fn load(&mut self, backend: &dyn MovieBackend) {
        if self.query.is_empty() {
            self.loading = false;
            self.movies.clear();
            self.total_results = 0;
            return;
        }

        self.loading = true;
        self.error = None;
        let query = MovieQuery::new(self.page, self.page_size).with_search(&self.query);
        let result = backend.list_movies(query).await;
        self.finish_load(result);
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta::titled(
            &format!("Search: {}", self.query),
            &format!("Search results for \"{}\"", self.query),
        )
    }

    fn page_link(&self, page: u32) -> String {
        href(
            "/search",
            &[("q", self.query.clone()), ("page", page.to_string())],
        )
    }

    pub fn render(&self) -> String {
        let mut html = format!(
            r#"<div class="search-results max-w-6xl mx-auto"><h1 class="text-3xl font-bold mb-6">Search Results: "{}"</h1>"#,
            escape(&self.query)
        );

        if self.loading {
            html.push_str(&spinner(SpinnerSize::Large));
        }
        if let Some(error) = &self.error {
            html.push_str(&error_banner(error));
        }

        if !self.loading && self.error.is_none() {
            if self.total_results > 0 {
                let noun = if self.total_results == 1 {
            "movie"
        } else {
            "movies"
        };
                html.push_str(&format!(
                    r#"<p class="result-count mb-6 text-gray-600">Found {} {}</p>"#,
                    self.total_results, noun
                ));

                let cards: String = self
                    .movies
                    .iter()
                    .map(|movie| movie_card(movie, &movie_link(movie.id), false))
                    .collect();
                html.push_str(&format!(
                    r#"<div class="movie-grid grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6 mb-8">{}</div>"#,
                    cards
                ));
                html.push_str(&pagination(self.page, self.total_pages(), |page| {
                    self.page_link(page)
                }));
            } else {
                let message = if self.query.is_empty() {
                    "Enter a search term to find movies.".to_string()
                } else {
                    format!(
                        "No movies found matching \"{}\". Try a different search term.",
                        self.query
                    )
                };
                html.push_str(&format!(
                    r#"<div class="no-results bg-yellow-50 p-6 rounded-lg"><p class="text-lg">{}</p></div>"#,
                    escape(&message)
                ));
            }
        }

        html.push_str("</div>");
        html
    }
}
