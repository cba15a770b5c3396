//! HTML building blocks.
//!
//! Components are pure functions from models to markup. All text coming from
//! the backend goes through [`html::escape`].

pub mod cards;
pub mod controls;
pub mod feedback;
pub mod html;
pub mod layout;
pub mod pagination;
pub mod stats;

pub use cards::{movie_card, recommendation_card, MOVIE_CARD_CLASS, RECOMMENDATION_CARD_CLASS};
pub use controls::{live_search_input, method_selector, search_bar};
pub use feedback::{empty_state, error_banner, spinner, SpinnerSize};
pub use layout::{page, PageMeta};
pub use pagination::{clamp_page, pagination};
pub use stats::stats_panel;
