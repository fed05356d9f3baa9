//! The `routes.json` build artifact.
//!
//! One object per discovered path; view and loader fields are runtime-only
//! and never appear here. Immutable after emission, one file per plugin
//! build.

use std::path::Path;

use serde::{Deserialize, Serialize};

use plughub_core::result::AppResult;

/// One discovered route path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestRoute {
    /// The route pattern.
    pub path: String,
}

/// The route-path manifest consumed by the host's static route-table
/// generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteManifest {
    /// Discovered routes, in contribution order.
    pub routes: Vec<ManifestRoute>,
}

impl RouteManifest {
    /// Builds a manifest from an ordered path sequence.
    pub fn from_paths(paths: impl IntoIterator<Item = String>) -> Self {
        Self {
            routes: paths
                .into_iter()
                .map(|path| ManifestRoute { path })
                .collect(),
        }
    }

    /// The ordered path projection.
    pub fn paths(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.path.as_str()).collect()
    }

    /// Writes the manifest as pretty JSON with a trailing newline.
    pub fn write(&self, path: &Path) -> AppResult<()> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
