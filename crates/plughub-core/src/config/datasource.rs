//! Data-source configuration.

use serde::{Deserialize, Serialize};

/// Settings for the host data source handed to plugin units.
///
/// The DSN is opaque at this layer; see
/// [`DataSourceHandle`](crate::datasource::DataSourceHandle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Logical data-source name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Connection string.
    #[serde(default = "default_dsn")]
    pub dsn: String,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            dsn: default_dsn(),
        }
    }
}

fn default_name() -> String {
    "primary".to_string()
}

fn default_dsn() -> String {
    "postgres://localhost/plughub".to_string()
}
