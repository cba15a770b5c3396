use crate::{components::stats_panel, models::DatasetStats, services::backend::MovieBackend};

/// Dataset statistics shown in the home screen header.
///
/// Stats are decorative: a failed load is logged and the panel is left out
/// instead of failing the page.
#[derive(Debug, Clone, Default)]
pub struct HomeStats {
    stats: Option<DatasetStats>,
}

impl HomeStats {
    pub fn stats(&self) -> Option<&DatasetStats> {
        self.stats.as_ref()
    }

    pub async fn load(&mut self, backend: &dyn MovieBackend) {
        match backend.stats().await {
            Ok(stats) => self.stats = Some(stats),
            Err(e) => {
                tracing::warn!(error = %e, backend = backend.name(), "Failed to load stats");
                self.stats = None;
            }
        }
    }

    pub fn render(&self) -> String {
        let panel = self.stats.as_ref().map(stats_panel).unwrap_or_default();
        format!(
            r#"<section class="hero mb-8"><p class="text-gray-600 mt-2">Find your next favorite movie with our intelligent recommendation system</p>{}</section>"#,
            panel
        )
    }
}
