use serde::{Deserialize, Deserializer, Serialize};

/// A movie as returned by the recommendation backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Backend identifier for the movie
    pub id: u64,
    pub title: String,
    /// Genre labels, in backend order
    #[serde(default)]
    pub genres: Vec<String>,
    /// Release year, when the backend knows it
    #[serde(
        default,
        deserialize_with = "deserialize_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
}

impl Movie {
    /// Number of genre badges a card shows before collapsing the rest into `+N`
    pub const VISIBLE_GENRES: usize = 3;

    /// Genres shown as badges on a card
    pub fn visible_genres(&self) -> &[String] {
        let end = self.genres.len().min(Self::VISIBLE_GENRES);
        &self.genres[..end]
    }

    /// Count of genres hidden behind the `+N` badge
    pub fn hidden_genre_count(&self) -> usize {
        self.genres.len().saturating_sub(Self::VISIBLE_GENRES)
    }
}

/// The backend has sent the year as a string, a number, or null depending on
/// the dataset revision.
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Text(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Some(RawYear::Number(year)) => Some(year.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_with_genres(genres: &[&str]) -> Movie {
        Movie {
            id: 1,
            title: "Toy Story".to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            year: None,
        }
    }

    #[test]
    fn test_year_accepts_string_number_and_null() {
        let text: Movie =
            serde_json::from_str(r#"{"id": 1, "title": "Heat", "genres": [], "year": "1995"}"#)
                .unwrap();
        assert_eq!(text.year.as_deref(), Some("1995"));

        let number: Movie =
            serde_json::from_str(r#"{"id": 1, "title": "Heat", "genres": [], "year": 1995}"#)
                .unwrap();
        assert_eq!(number.year.as_deref(), Some("1995"));

        let null: Movie =
            serde_json::from_str(r#"{"id": 1, "title": "Heat", "genres": [], "year": null}"#)
                .unwrap();
        assert_eq!(null.year, None);

        let missing: Movie = serde_json::from_str(r#"{"id": 1, "title": "Heat"}"#).unwrap();
        assert_eq!(missing.year, None);
        assert!(missing.genres.is_empty());
    }

    #[test]
    fn test_blank_year_is_none() {
        let movie: Movie =
            serde_json::from_str(r#"{"id": 7, "title": "Heat", "genres": [], "year": "  "}"#)
                .unwrap();
        assert_eq!(movie.year, None);
    }

    #[test]
    fn test_visible_genres_are_capped() {
        let movie = movie_with_genres(&["Animation", "Children", "Comedy", "Fantasy", "Adventure"]);
        assert_eq!(movie.visible_genres(), &["Animation", "Children", "Comedy"]);
        assert_eq!(movie.hidden_genre_count(), 2);

        let short = movie_with_genres(&["Drama"]);
        assert_eq!(short.visible_genres(), &["Drama"]);
        assert_eq!(short.hidden_genre_count(), 0);
    }
}
