use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::Movie;

/// Strategy the backend uses to pick recommendations
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMethod {
    /// Similar movies based on attributes
    Content,
    /// Based on what users with similar ratings liked
    Collaborative,
    /// Combines content-based and collaborative filtering
    #[default]
    Hybrid,
}

impl RecommendationMethod {
    /// Order in which the selector shows the methods
    pub const ALL: [RecommendationMethod; 3] = [
        RecommendationMethod::Hybrid,
        RecommendationMethod::Content,
        RecommendationMethod::Collaborative,
    ];

    /// Wire value used in the `method` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationMethod::Content => "content",
            RecommendationMethod::Collaborative => "collaborative",
            RecommendationMethod::Hybrid => "hybrid",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecommendationMethod::Content => "Content-based",
            RecommendationMethod::Collaborative => "Collaborative",
            RecommendationMethod::Hybrid => "Hybrid",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RecommendationMethod::Content => "Recommends similar movies based on attributes",
            RecommendationMethod::Collaborative => "Recommends based on user preferences",
            RecommendationMethod::Hybrid => "Combines content-based and collaborative filtering",
        }
    }
}

impl Display for RecommendationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "content" | "content-based" => Ok(RecommendationMethod::Content),
            "collaborative" => Ok(RecommendationMethod::Collaborative),
            "hybrid" => Ok(RecommendationMethod::Hybrid),
            other => Err(format!("unknown recommendation method: {}", other)),
        }
    }
}

/// A recommended movie together with the backend's reason for suggesting it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(flatten)]
    pub movie: Movie,
    #[serde(default)]
    pub explanation: String,
}

/// Response of the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    /// The movie recommendations were computed for
    pub base_movie: Movie,
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub method: RecommendationMethod,
}
