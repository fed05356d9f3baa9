//! Plugin system configuration.

use serde::{Deserialize, Serialize};

/// Plugin system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Directory containing plugin artifacts.
    #[serde(default = "default_plugin_directory")]
    pub directory: String,
    /// Whether to automatically load plugins on startup.
    #[serde(default = "default_true")]
    pub auto_load: bool,
    /// Path to a sibling checkout of the main repository, used by
    /// `sync-deps` when developing a plugin out of tree. Overridden by
    /// the `PLUGHUB_MAIN_REPO` environment variable.
    #[serde(default = "default_main_repo")]
    pub main_repo: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            directory: default_plugin_directory(),
            auto_load: default_true(),
            main_repo: default_main_repo(),
        }
    }
}

fn default_plugin_directory() -> String {
    "./plugins".to_string()
}

fn default_true() -> bool {
    true
}

fn default_main_repo() -> String {
    "../plughub".to_string()
}
