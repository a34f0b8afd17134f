use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::observability;
use crate::state::AppState;

pub mod kv;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics() -> (axum::http::StatusCode, String) {
    observability::encode_metrics()
}

/// Build the full application router: store routes plus health and metrics.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let store_routes = Router::new()
        .route("/", get(kv::get_all))
        .route("/get/:key", get(kv::get))
        .route("/set", post(kv::set))
        .route("/search", get(kv::search));

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics));

    store_routes
        .merge(ops)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and the like
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use service::MemoryStore;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::in_memory(), CorsLayer::very_permissive())
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn health_ok() {
        let resp = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn empty_store_get_all_is_empty_object() {
        let resp = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({}));
    }

    #[tokio::test]
    async fn set_rejects_array_body() {
        let app = app();
        let resp = app
            .clone()
            .oneshot(
                Request::post("/set")
                    .header("content-type", "application/json")
                    .body(Body::from("[1,2,3]"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(resp).await["error"].is_string());

        let resp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(resp).await, json!({}));
    }

    #[tokio::test]
    async fn search_without_params_is_empty_array() {
        let resp = app()
            .oneshot(Request::get("/search").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!([]));
    }

    #[tokio::test]
    async fn search_repeated_param_uses_first_value() {
        let store = MemoryStore::with_pairs(
            [("abc-1", json!(1)), ("abc-2", json!(2)), ("xyz-1", json!("three"))]
                .into_iter()
                .collect(),
        );
        let app = build_router(AppState::new(Arc::new(store)), CorsLayer::very_permissive());
        let resp = app
            .oneshot(
                Request::get("/search?prefix=abc&prefix=xyz&suffix=-1&suffix=-2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let keys: Vec<String> = serde_json::from_value(body_json(resp).await).unwrap();
        assert_eq!(keys.len(), 4);
        let (from_prefix, from_suffix) = keys.split_at(2);
        assert!(from_prefix.iter().all(|k| k.starts_with("abc")));
        let mut from_suffix = from_suffix.to_vec();
        from_suffix.sort();
        assert_eq!(from_suffix, vec!["abc-1".to_string(), "xyz-1".to_string()]);
    }

    #[tokio::test]
    async fn metrics_exposed_as_text() {
        let resp = app()
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
