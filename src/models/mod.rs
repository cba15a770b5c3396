use serde::{Deserialize, Serialize};

mod movie;
mod recommendation;

pub use movie::Movie;
pub use recommendation::{Recommendation, RecommendationMethod, RecommendationSet};

// ============================================================================
// Backend response types
// ============================================================================

/// One page of the movie catalog, optionally filtered by a search string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviePage {
    /// Number of movies matching the query across all pages
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub movies: Vec<Movie>,
}

impl MoviePage {
    /// Number of pages needed to show `total` movies, never less than one
    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.limit)
    }
}

/// `ceil(total / limit)`, clamped to at least one page
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    let pages = total.div_ceil(u64::from(limit));
    pages.clamp(1, u64::from(u32::MAX)) as u32
}

/// Dataset statistics reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub total_movies: u64,
    pub total_users: u64,
    pub total_ratings: u64,
    pub avg_rating: f64,
    #[serde(default)]
    pub unique_genres: u64,
}

/// Result of asking the backend to (re)prepare its dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrepareResult {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(9742, 20), 488);
        assert_eq!(total_pages(50, 0), 1);
    }

    #[test]
    fn test_movie_page_deserialization() {
        let json = r#"{
            "total": 25,
            "page": 2,
            "limit": 12,
            "movies": [{"id": 5, "title": "Heat (1995)", "genres": ["Action", "Crime"], "year": "1995"}]
        }"#;

        let page: MoviePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 25);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.movies[0].title, "Heat (1995)");
    }

    #[test]
    fn test_stats_deserialization() {
        let json = r#"{
            "totalMovies": 9742,
            "totalUsers": 610,
            "totalRatings": 100836,
            "avgRating": 3.5015,
            "uniqueGenres": 20
        }"#;

        let stats: DatasetStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_movies, 9742);
        assert_eq!(stats.total_users, 610);
        assert_eq!(stats.total_ratings, 100836);
        assert!((stats.avg_rating - 3.5015).abs() < f64::EPSILON);
        assert_eq!(stats.unique_genres, 20);
    }
}
