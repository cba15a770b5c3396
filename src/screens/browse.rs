use crate::{
    components::{empty_state, error_banner, movie_card, pagination, spinner, SpinnerSize},
    error::ApiResult,
    models::{Movie, MoviePage},
    services::backend::{MovieBackend, MovieQuery},
};

use super::home_link;

/// Browsable, searchable movie grid of the home screen
#[derive(Debug, Clone)]
pub struct MovieBrowser {
    page: u32,
    total_pages: u32,
    page_size: u32,
    search: String,
    movies: Vec<Movie>,
    selected: Option<u64>,
    loading: bool,
    error: Option<String>,
}

impl MovieBrowser {
    /// A browser on page 1 with no search; starts in the loading state
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            total_pages: 1,
            page_size,
            search: String::new(),
            movies: Vec::new(),
            selected: None,
            loading: true,
            error: None,
        }
    }

    /// Restores a browser from link state. The page is trusted until the
    /// first response tells us how many pages exist.
    pub fn restore(page_size: u32, page: u32, search: &str, selected: Option<u64>) -> Self {
        let mut browser = Self::new(page_size);
        browser.page = page.max(1);
        browser.total_pages = browser.page;
        browser.search = search.trim().to_string();
        browser.selected = selected;
        browser
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Moves to `page` if it exists and differs from the current one.
    /// Returns whether a reload is needed.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page < 1 || page > self.total_pages || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Applies a settled search text and goes back to page 1.
    /// Returns whether a reload is needed.
    pub fn apply_search(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text == self.search {
            return false;
        }
        self.search = text.to_string();
        self.page = 1;
        true
    }

    pub fn select(&mut self, movie_id: Option<u64>) {
        self.selected = movie_id;
    }

    pub fn find_movie(&self, movie_id: u64) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == movie_id)
    }

    pub fn query(&self) -> MovieQuery {
        MovieQuery::new(self.page, self.page_size).with_search(&self.search)
    }

    /// Marks the browser as loading and returns the request to send
    pub fn begin_load(&mut self) -> MovieQuery {
        self.loading = true;
        self.error = None;
        self.query()
    }

    pub fn finish_load(&mut self, result: ApiResult<MoviePage>) {
        self.loading = false;
        match result {
            Ok(page) => {
                self.total_pages = page.total_pages();
                self.movies = page.movies;
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    page = self.page,
                    search = %self.search,
                    "Failed to load movies"
                );
                self.error = Some(e.to_string());
            }
        }
    }

    pub async fn load(&mut self, backend: &dyn MovieBackend) {
        let query = self.begin_load();
        let result = backend.list_movies(query).await;
        self.finish_load(result);
    }

    /// Inner markup of the results container: spinner, error, grid, pagination
    pub fn render(&self) -> String {
        let mut html = String::new();

        if self.loading {
            html.push_str(&spinner(SpinnerSize::Medium));
        }
        if let Some(error) = &self.error {
            html.push_str(&error_banner(error));
        }
        if !self.loading && self.error.is_none() && self.movies.is_empty() {
            html.push_str(&empty_state("No movies found. Try adjusting your search."));
        }

        let cards: String = self
            .movies
            .iter()
            .map(|movie| {
                movie_card(
                    movie,
                    &home_link(self.page, &self.search, Some(movie.id)),
                    self.selected == Some(movie.id),
                )
            })
            .collect();
        html.push_str(&format!(
            r#"<div class="movie-grid grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">{}</div>"#,
            cards
        ));

        html.push_str(&pagination(self.page, self.total_pages, |page| {
            home_link(page, &self.search, self.selected)
        }));
        html
    }
}
