//! Application runner — wires plugin exports into the registry and the
//! contribution host, then serves the composed router.

use std::sync::Arc;

use tokio::sync::watch;

use plughub_contrib::host::ContributionHost;
use plughub_core::config::AppConfig;
use plughub_core::error::AppError;
use plughub_core::result::AppResult;
use plughub_registry::registry::ServiceRegistry;
use plughub_sdk::prelude::PluginExport;

use crate::router::build_router;
use crate::state::AppState;

/// Runs the PlugHub server with the given configuration and plugin
/// exports.
///
/// Plugin exports are assembled at the composition root; this function
/// wires them through the full protocol: unit registration, strictly
/// ordered initialization, frontend contribution mounting, router
/// assembly, and reverse-order teardown on shutdown.
pub async fn run_server(config: AppConfig, mut exports: Vec<PluginExport>) -> AppResult<()> {
    tracing::info!("Starting PlugHub server...");

    // ── Step 1: Register backend lifecycle units ─────────────────
    let registry = Arc::new(ServiceRegistry::new());

    for export in &mut exports {
        export.register_units(&registry).await?;
    }

    // ── Step 2: Ordered initialization ───────────────────────────
    // A failing unit is fatal to startup and must be named.
    registry.initialize_all().await.map_err(|failure| {
        tracing::error!(
            unit = %failure.unit,
            initialized = ?failure.initialized,
            error = %failure.error,
            "Lifecycle unit initialization failed"
        );
        AppError::from(failure)
    })?;

    // ── Step 3: Mount frontend contributions ─────────────────────
    let mut contribution_host = ContributionHost::new();

    for export in &exports {
        if let Some(frontend) = export.frontend() {
            contribution_host.mount_plugin(export.plugin_id(), frontend.as_ref())?;
        }
    }

    tracing::info!(
        routes = ?contribution_host.routes().paths(),
        outlets = ?contribution_host.outlets().outlet_names(),
        "Frontend contributions composed"
    );

    // ── Step 4: Build and start HTTP server ──────────────────────
    let plugin_routers = exports
        .iter_mut()
        .filter_map(|export| export.take_api_router())
        .collect();

    let state = AppState::new(Arc::new(config.clone()), Arc::clone(&registry));
    let app = build_router(state, plugin_routers);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("PlugHub server listening on {}", addr);

    let (shutdown_tx, _shutdown_rx) = watch::channel(false);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 5: Reverse-order teardown ───────────────────────────
    let failures = registry.destroy_all().await;
    for failure in &failures {
        tracing::warn!(unit = %failure.unit, error = %failure.error, "Unit teardown failed");
    }

    tracing::info!("PlugHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
}
