use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer, limit::RequestBodyLimitLayer,
    set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::api::handlers::{self as api_handlers, AppState};
use crate::config::Settings;
use crate::web::handlers as web_handlers;

/// Create the router with all endpoints (API + Web UI)
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    let api_routes = Router::new()
        .route("/recommend", get(api_handlers::recommend))
        .with_state(state.clone());

    // Web UI: the form posts back to itself
    let web_routes = Router::new()
        .route("/", get(web_handlers::index).post(web_handlers::submit))
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(api_handlers::health_check))
        .with_state(state);

    Router::new()
        .merge(web_routes)
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            // Request body size limit - the form carries a single short field
            RequestBodyLimitLayer::new(settings.server.max_request_body_size),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(
                "default-src 'self'; style-src 'self' 'unsafe-inline'; object-src 'none'; base-uri 'self'; form-action 'self'",
            ),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{HealthResponse, RecommendResponse};
    use crate::config::{RecommenderConfig, ServerConfig};
    use crate::ranker::{build_index, reference_corpus};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let settings = Settings {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                max_request_body_size: 65536,
            },
            recommender: RecommenderConfig {
                top_k: 3,
                corpus_path: None,
            },
        };

        AppState {
            index: Arc::new(build_index(reference_corpus()).unwrap()),
            settings,
        }
    }

    fn create_test_app() -> Router {
        let state = create_test_state();
        create_router(state.clone(), &state.settings)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_form_page_renders() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::X_FRAME_OPTIONS).unwrap(),
            "DENY"
        );
        let body = body_string(response).await;
        assert!(body.contains(r#"name="ingredients""#));
        assert!(!body.contains("Recommendations:"));
    }

    #[tokio::test]
    async fn test_form_submission_renders_recommendations() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("ingredients=garlic%2C+chicken%2C+butter"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Recommendations:"));
        assert!(body.contains("Garlic Butter Chicken"));
        assert!(body.contains("Similarity: 0.882"));
    }

    #[tokio::test]
    async fn test_form_submission_without_matches() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("ingredients=xyz123nonsense"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("No strong matches"));
    }

    #[tokio::test]
    async fn test_recommend_api() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/recommend?q=chocolate+sugar+flour&k=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: RecommendResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body.total, 2);
        assert_eq!(body.results[0].title, "Chocolate Mug Cake");
        assert_eq!(body.query, "chocolate sugar flour");
    }

    #[tokio::test]
    async fn test_recommend_api_defaults_to_configured_top_k() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/recommend?q=pasta")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body: RecommendResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body.results.len(), 3);
    }

    #[tokio::test]
    async fn test_recommend_api_rejects_zero_k() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/recommend?q=pasta&k=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: HealthResponse = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body.status, "ok");
        assert_eq!(body.recipes, 7);
    }
}
