//! Host router assembly.
//!
//! Plugin endpoint groups are nested under `/api` next to the host's own
//! routes. Plugins hand over plain routers; the host owns the layering.

use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the complete host router.
///
/// `plugin_routers` are the endpoint groups collected from each plugin's
/// export bundle, in plugin-registration order.
pub fn build_router(state: AppState, plugin_routers: Vec<Router>) -> Router {
    let cors = build_cors_layer(&state);

    // Plugin routers carry no host state; host routes get theirs here so
    // everything merges as complete routers.
    let mut api_routes = Router::new()
        .route("/health", get(health))
        .with_state(state);

    for plugin_router in plugin_routers {
        api_routes = api_routes.merge(plugin_router);
    }

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Host liveness probe; also reports the registered unit names.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let units = state.registry.unit_names().await;
    Json(serde_json::json!({
        "status": "ok",
        "units": units,
    }))
}

fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors_allowed_origins;

    if origins.is_empty() {
        return CorsLayer::new();
    }

    let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(Any)
        .allow_headers(Any)
}
