//! CLI command definitions and dispatch.

pub mod extract_routes;
pub mod serve;
pub mod sync_deps;

use clap::{Parser, Subcommand};

use plughub_core::config::AppConfig;
use plughub_core::error::AppError;

/// PlugHub — Plugin Extension Platform
#[derive(Debug, Parser)]
#[command(name = "plughub", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (selects config/<env>.toml overlay)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the PlugHub server
    Serve(serve::ServeArgs),
    /// Extract a plugin's route paths into routes.json (build step)
    ExtractRoutes(extract_routes::ExtractRoutesArgs),
    /// Copy shared SDK crates from the main repository checkout
    SyncDeps(sync_deps::SyncDepsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::ExtractRoutes(args) => extract_routes::execute(args),
            Commands::SyncDeps(args) => sync_deps::execute(args, &self.env),
        }
    }
}

/// Helper: load configuration for the selected environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}
