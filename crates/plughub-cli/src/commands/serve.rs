//! Start the PlugHub server.

use clap::Args;

use plughub_core::datasource::DataSourceHandle;
use plughub_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, env: &str) -> Result<(), AppError> {
    let mut config = super::load_config(env)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting PlugHub server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    let data_source = DataSourceHandle::new(&config.datasource.name, &config.datasource.dsn);

    let exports = if config.plugins.auto_load {
        vec![plugin_sample::export(
            data_source,
            plugin_sample::unit::SampleUnitOptions::default(),
        )]
    } else {
        Vec::new()
    };

    plughub_api::app::run_server(config, exports).await
}
