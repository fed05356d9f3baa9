//! PlugHub Server — Plugin Extension Platform
//!
//! Main entry point that assembles plugin exports and starts the host.

use tracing_subscriber::{EnvFilter, fmt};

use plughub_core::config::AppConfig;
use plughub_core::datasource::DataSourceHandle;
use plughub_core::error::AppError;
use plughub_sdk::prelude::PluginExport;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the selected environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("PLUGHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Assemble the plugin exports and run the server
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting PlugHub v{}", env!("CARGO_PKG_VERSION"));

    // The composition root is the only place that knows concrete plugins;
    // everything downstream sees only export bundles.
    let exports = assemble_plugins(&config);

    plughub_api::app::run_server(config, exports).await
}

/// Construct the export bundle of every compiled-in plugin
fn assemble_plugins(config: &AppConfig) -> Vec<PluginExport> {
    if !config.plugins.auto_load {
        tracing::info!("Plugin auto-load disabled; starting with host routes only");
        return Vec::new();
    }

    let data_source = DataSourceHandle::new(&config.datasource.name, &config.datasource.dsn);

    vec![plugin_sample::export(
        data_source,
        plugin_sample::unit::SampleUnitOptions::default(),
    )]
}
