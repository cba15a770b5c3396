//! Screen state.
//!
//! Each screen owns the data it shows plus its own `loading` flag and error
//! message, knows which backend call refreshes it, and renders itself. Screens
//! never share state with each other.

pub mod browse;
pub mod detail;
pub mod home;
pub mod recommendations;
pub mod search;

pub use browse::MovieBrowser;
pub use detail::MovieDetail;
pub use home::HomeStats;
pub use recommendations::RecommendationsPanel;
pub use search::SearchResults;

use crate::components::html::href;

/// Element ids the live session swaps fragments into
pub const MOVIE_RESULTS_ID: &str = "movie-results";
pub const RECOMMENDATIONS_ID: &str = "recommendations";

/// Link to the home screen with the given browse state
pub fn home_link(page: u32, search: &str, selected: Option<u64>) -> String {
    let page = if page > 1 {
        page.to_string()
    } else {
        String::new()
    };
    let selected = selected.map(|id| id.to_string()).unwrap_or_default();
    href(
        "/",
        &[
            ("page", page),
            ("search", search.to_string()),
            ("selected", selected),
        ],
    )
}

pub fn movie_link(movie_id: u64) -> String {
    format!("/movie/{}", movie_id)
}

/// Wraps a fragment in the container the live session targets
pub fn container(id: &str, inner: &str) -> String {
    format!(r#"<div id="{}">{}</div>"#, id, inner)
}
