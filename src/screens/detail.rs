use crate::{
    components::{
        error_banner,
        html::{escape, href},
        method_selector, recommendation_card, spinner, PageMeta, SpinnerSize,
    },
    models::{Movie, Recommendation, RecommendationMethod},
    services::backend::{MovieBackend, RecommendationQuery},
};

use super::movie_link;

/// A movie's details and its recommendations for one method
#[derive(Debug, Clone)]
pub struct MovieDetail {
    movie_id: u64,
    method: RecommendationMethod,
    count: u32,
    movie: Option<Movie>,
    recommendations: Vec<Recommendation>,
    loading: bool,
    error: Option<String>,
}

impl MovieDetail {
    pub fn new(movie_id: u64, method: RecommendationMethod, count: u32) -> Self {
        Self {
            movie_id,
            method,
            count,
            movie: None,
            recommendations: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn movie(&self) -> Option<&Movie> {
        self.movie.as_ref()
    }

    pub fn method(&self) -> RecommendationMethod {
        self.method
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn query(&self) -> RecommendationQuery {
        RecommendationQuery::new(self.movie_id, self.count).with_method(self.method)
    }

    pub async fn load(&mut self, backend: &dyn MovieBackend) {
        self.loading = true;
        self.error = None;

        let result = backend.recommendations(self.query()).await;
        self.loading = false;
        match result {
            Ok(set) => {
                self.movie = Some(set.base_movie);
                self.recommendations = set.recommendations;
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    movie_id = self.movie_id,
                    method = %self.method,
                    "Failed to load movie details"
                );
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn meta(&self) -> PageMeta {
        match &self.movie {
            Some(movie) => PageMeta::titled(
                &movie.title,
                &format!("Get recommendations similar to {}", movie.title),
            ),
            None => PageMeta::titled("Movie Details", "Movie details and recommendations"),
        }
    }

    fn method_link(&self, method: RecommendationMethod) -> String {
        href(
            &movie_link(self.movie_id),
            &[("method", method.as_str().to_string())],
        )
    }

    fn render_movie(movie: &Movie) -> String {
        let year = movie
            .year
            .as_ref()
            .map(|y| format!(r#"<span class="year text-gray-600 mr-4">Year: {}</span>"#, escape(y)))
            .unwrap_or_default();
        let genres: String = movie
            .genres
            .iter()
            .map(|g| {
                format!(
                    r#"<span class="genre px-3 py-1 bg-blue-100 text-blue-800 text-sm rounded-full">{}</span>"#,
                    escape(g)
                )
            })
            .collect();

        format!(
            r#"<div class="movie-details bg-white rounded-xl shadow-md p-6 mb-8"><h1 class="text-3xl font-bold mb-2">{}</h1><div class="mb-4">{}<div class="mt-3 flex flex-wrap gap-2">{}</div></div></div>"#,
            escape(&movie.title),
            year,
            genres
        )
    }

    pub fn render(&self) -> String {
        let mut html = String::from(r#"<div class="movie-detail max-w-6xl mx-auto">"#);

        if self.loading {
            html.push_str(&spinner(SpinnerSize::Large));
        }
        if let Some(error) = &self.error {
            html.push_str(&error_banner(error));
        }

        if let (false, None, Some(movie)) = (self.loading, &self.error, &self.movie) {
            html.push_str(&Self::render_movie(movie));
            html.push_str(&format!(
                r#"<div class="mb-8"><div class="flex flex-col md:flex-row justify-between items-start md:items-center mb-6"><h2 class="text-2xl font-bold mb-4 md:mb-0">Recommended Movies</h2>{}</div>"#,
                method_selector(self.method, |m| self.method_link(m))
            ));

            if self.recommendations.is_empty() {
                html.push_str(r#"<p class="text-gray-600">No recommendations found.</p>"#);
            } else {
                let cards: String = self
                    .recommendations
                    .iter()
                    .map(|r| recommendation_card(r, &movie_link(r.movie.id)))
                    .collect();
                html.push_str(&format!(
                    r#"<div class="recommendation-grid grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">{}</div>"#,
                    cards
                ));
            }
            html.push_str("</div>");
        }

        html.push_str("</div>");
        html
    }
}
