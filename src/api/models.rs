use serde::{Deserialize, Serialize};

use crate::ranker::QueryResult;

/// Recommendation request parameters
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendParams {
    #[serde(default)]
    pub q: String,
    /// Number of results; falls back to the configured top-k
    pub k: Option<usize>,
}

/// Recommendation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub query: String,
    pub results: Vec<QueryResult>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub recipes: usize,
}
