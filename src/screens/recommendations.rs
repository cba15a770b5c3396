use crate::{
    components::{
        empty_state, error_banner, html::escape, recommendation_card, spinner, SpinnerSize,
    },
    error::ApiResult,
    models::{Movie, Recommendation, RecommendationSet},
    services::backend::{MovieBackend, RecommendationQuery},
};

/// Recommendations for the movie selected on the home screen
#[derive(Debug, Clone)]
pub struct RecommendationsPanel {
    count: u32,
    selected: Option<u64>,
    /// Title shown in the heading; filled from the backend's base movie
    selected_title: Option<String>,
    recommendations: Vec<Recommendation>,
    loading: bool,
    error: Option<String>,
}

impl RecommendationsPanel {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            selected: None,
            selected_title: None,
            recommendations: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find_movie(&self, movie_id: u64) -> Option<&Movie> {
        self.recommendations
            .iter()
            .map(|r| &r.movie)
            .find(|m| m.id == movie_id)
    }

    /// Selects a movie (or clears the selection). `known` is the movie when the
    /// caller already has it, so the heading can show its title right away.
    /// Returns the request to send, if any.
    pub fn select(
        &mut self,
        movie_id: Option<u64>,
        known: Option<&Movie>,
    ) -> Option<RecommendationQuery> {
        self.selected = movie_id;
        self.selected_title = known.map(|m| m.title.clone());
        self.error = None;

        match movie_id {
            Some(id) => {
                self.loading = true;
                Some(RecommendationQuery::new(id, self.count))
            }
            None => {
                self.loading = false;
                self.recommendations.clear();
                None
            }
        }
    }

    pub fn finish_load(&mut self, result: ApiResult<RecommendationSet>) {
        self.loading = false;
        match result {
            Ok(set) => {
                self.selected_title = Some(set.base_movie.title);
                self.recommendations = set.recommendations;
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    movie_id = ?self.selected,
                    "Failed to load recommendations"
                );
                self.recommendations.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    pub async fn load(
        &mut self,
        backend: &dyn MovieBackend,
        movie_id: Option<u64>,
        known: Option<&Movie>,
    ) {
        if let Some(query) = self.select(movie_id, known) {
            let result = backend.recommendations(query).await;
            self.finish_load(result);
        }
    }

    /// Inner markup of the recommendations container; `link` maps a
    /// recommended movie id to the URL that selects it
    pub fn render(&self, link: impl Fn(u64) -> String) -> String {
        let Some(movie_id) = self.selected else {
            return r#"<div class="p-4 text-center text-gray-500">Select a movie to see recommendations</div>"#
                .to_string();
        };

        let title = self
            .selected_title
            .clone()
            .unwrap_or_else(|| format!("movie #{}", movie_id));
        let mut html = format!(
            r#"<h2 class="text-xl font-semibold mb-2">Recommendations for {}</h2>"#,
            escape(&title)
        );

        if self.loading {
            html.push_str(&spinner(SpinnerSize::Medium));
        }
        if let Some(error) = &self.error {
            html.push_str(&error_banner(error));
        }
        if !self.loading && self.error.is_none() && self.recommendations.is_empty() {
            html.push_str(&empty_state("No recommendations found for this movie."));
        }

        let cards: String = self
            .recommendations
            .iter()
            .map(|r| recommendation_card(r, &link(r.movie.id)))
            .collect();
        html.push_str(&format!(
            r#"<div class="recommendation-grid grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">{}</div>"#,
            cards
        ));
        html
    }
}
