use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::{api::models::*, config::Settings, ranker::Index, Error, Result};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<Index>,
    pub settings: Settings,
}

/// GET /api/recommend - Rank recipes against a free-text ingredient list
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<RecommendResponse>> {
    debug!("Recommend request: {:?}", params);

    let top_k = params.k.unwrap_or(state.settings.recommender.top_k);
    if top_k == 0 {
        return Err(Error::Validation("k must be at least 1".to_string()));
    }

    let results = state.index.recommend(&params.q, top_k);

    Ok(Json(RecommendResponse {
        query: params.q,
        total: results.len(),
        results,
    }))
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        recipes: state.index.len(),
    }))
}
