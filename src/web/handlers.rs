use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Form,
};
use serde::Deserialize;
use tracing::debug;

use crate::{api::handlers::AppState, error::Error, ranker::QueryResult, Result};

/// Recommendation form template
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    query: String,
    submitted: bool,
    results: Vec<RecipeCardData>,
}

#[derive(Clone)]
#[allow(dead_code)] // Fields are used by Askama templates
struct RecipeCardData {
    title: String,
    ingredients: String,
    score: String,
}

impl From<QueryResult> for RecipeCardData {
    fn from(result: QueryResult) -> Self {
        Self {
            title: result.title,
            ingredients: result.ingredients,
            score: format!("{:.3}", result.score),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendForm {
    #[serde(default)]
    ingredients: String,
}

/// GET / - Empty form
pub async fn index() -> Result<impl IntoResponse> {
    render(IndexTemplate {
        query: String::new(),
        submitted: false,
        results: vec![],
    })
}

/// POST / - Form submission
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<RecommendForm>,
) -> Result<impl IntoResponse> {
    debug!("Form submission: {:?}", form.ingredients);

    let results = state
        .index
        .recommend(&form.ingredients, state.settings.recommender.top_k);

    // Zero-score rows carry no signal; the page shows "no strong matches" instead
    let results = if results.iter().all(|r| r.score <= 0.0) {
        vec![]
    } else {
        results.into_iter().map(RecipeCardData::from).collect()
    };

    render(IndexTemplate {
        query: form.ingredients,
        submitted: true,
        results,
    })
}

fn render(template: IndexTemplate) -> Result<Html<String>> {
    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template render failed: {e}"))
    })?))
}
