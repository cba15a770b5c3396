//! Movie and recommendation cards.

use crate::models::{Movie, Recommendation};

use super::html::escape;

/// Marker class used to count rendered movie cards
pub const MOVIE_CARD_CLASS: &str = "movie-card";
pub const RECOMMENDATION_CARD_CLASS: &str = "recommendation-card";

fn genre_badges(movie: &Movie) -> String {
    let mut badges: String = movie
        .visible_genres()
        .iter()
        .map(|genre| {
            format!(
                r#"<span class="genre px-2 py-1 text-xs bg-blue-100 text-blue-800 rounded-full">{}</span>"#,
                escape(genre)
            )
        })
        .collect();

    let hidden = movie.hidden_genre_count();
    if hidden > 0 {
        badges.push_str(&format!(
            r#"<span class="genre-more px-2 py-1 text-xs bg-gray-100 text-gray-800 rounded-full">+{}</span>"#,
            hidden
        ));
    }
    badges
}

fn title_and_year(movie: &Movie) -> String {
    let title = escape(&movie.title);
    let mut html = format!(
        r#"<h3 class="font-semibold text-lg truncate" title="{}">{}</h3>"#,
        title, title
    );
    if let Some(year) = &movie.year {
        html.push_str(&format!(
            r#"<p class="year text-sm text-gray-600">{}</p>"#,
            escape(year)
        ));
    }
    html
}

/// A clickable movie card. `link` is where clicking the card navigates.
pub fn movie_card(movie: &Movie, link: &str, selected: bool) -> String {
    let ring = if selected {
        " selected ring-2 ring-blue-500"
    } else {
        ""
    };
    let marker = if selected {
        r#"<div class="selected-marker absolute top-2 right-2 bg-blue-500 text-white rounded-full w-6 h-6">✓</div>"#
    } else {
        ""
    };

    format!(
        r#"<a class="{class} relative block bg-white rounded-lg shadow-md p-4{ring}" href="{link}" data-movie-id="{id}">{heading}<div class="mt-2 flex flex-wrap gap-1">{badges}</div>{marker}</a>"#,
        class = MOVIE_CARD_CLASS,
        ring = ring,
        link = escape(link),
        id = movie.id,
        heading = title_and_year(movie),
        badges = genre_badges(movie),
        marker = marker,
    )
}

/// A recommendation card with a collapsible explanation.
///
/// The explanation toggle is a `<details>` element so that expanding one
/// card needs no script and no server round trip.
pub fn recommendation_card(recommendation: &Recommendation, link: &str) -> String {
    let movie = &recommendation.movie;

    format!(
        r#"<div class="{class} bg-white rounded-lg shadow-md p-4" data-movie-id="{id}"><a href="{link}">{heading}</a><div class="mt-2 flex flex-wrap gap-1">{badges}</div><details class="explanation mt-3 text-sm"><summary class="text-blue-600"><span class="when-closed">Why recommended?</span><span class="when-open">Hide explanation</span></summary><div class="mt-2 p-3 bg-gray-50 rounded-md">{explanation}</div></details></div>"#,
        class = RECOMMENDATION_CARD_CLASS,
        id = movie.id,
        link = escape(link),
        heading = title_and_year(movie),
        badges = genre_badges(movie),
        explanation = escape(&recommendation.explanation),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie() -> Movie {
        Movie {
            id: 1,
            title: "Toy Story (1995)".to_string(),
            genres: vec![
                "Adventure".to_string(),
                "Animation".to_string(),
                "Children".to_string(),
                "Comedy".to_string(),
                "Fantasy".to_string(),
            ],
            year: Some("1995".to_string()),
        }
    }

    #[test]
    fn test_movie_card_shows_three_genres_and_overflow() {
        let html = movie_card(&sample_movie(), "/movie/1", false);
        assert_eq!(html.matches(r#"class="genre "#).count(), 3);
        assert!(html.contains(">+2</span>"));
        assert!(html.contains("Toy Story (1995)"));
        assert!(html.contains(r#"<p class="year text-sm text-gray-600">1995</p>"#));
        assert!(!html.contains("selected-marker"));
    }

    #[test]
    fn test_movie_card_without_year() {
        let mut movie = sample_movie();
        movie.year = None;
        movie.genres.truncate(2);

        let html = movie_card(&movie, "/movie/1", false);
        assert!(!html.contains("class=\"year"));
        assert!(!html.contains("genre-more"));
    }

    #[test]
    fn test_selected_movie_card() {
        let html = movie_card(&sample_movie(), "/?selected=1", true);
        assert!(html.contains("selected-marker"));
        assert!(html.contains("ring-2"));
        assert!(html.contains(r#"href="/?selected=1""#));
    }

    #[test]
    fn test_recommendation_card_has_collapsed_explanation() {
        let recommendation = Recommendation {
            movie: sample_movie(),
            explanation: "Because you liked <Antz>".to_string(),
        };

        let html = recommendation_card(&recommendation, "/movie/1");
        assert!(html.contains("<details class=\"explanation"));
        assert!(!html.contains("<details class=\"explanation mt-3 text-sm\" open"));
        assert!(html.contains("Why recommended?"));
        assert!(html.contains("Because you liked &lt;Antz&gt;"));
    }
}
