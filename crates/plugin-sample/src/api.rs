//! Sample plugin HTTP endpoint group.
//!
//! Mounted by the host under its API prefix, wired independently of the
//! lifecycle unit.

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};

/// Builds the plugin's endpoint group.
pub fn api_router() -> Router {
    Router::new().route("/sample-plugin/health", get(health))
}

/// Liveness probe for the plugin's backend surface.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Sample plugin is running",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = api_router()
            .oneshot(
                Request::builder()
                    .uri("/sample-plugin/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
