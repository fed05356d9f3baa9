//! Extraction driver — strategy order, degradation policy, manifest
//! emission.
//!
//! Builds must never hard-fail because a plugin's contribution could not
//! be statically analyzed: "no routes found," "bundle missing," and
//! "parse failed" all degrade to a warning and a successful outcome.

use std::path::PathBuf;

use tracing::{info, warn};

use plughub_core::result::AppResult;

use crate::artifact::extract_from_artifact;
use crate::manifest::RouteManifest;
use crate::source::extract_from_source;

/// Which strategy produced the paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Static source scan.
    Source,
    /// Built-artifact load.
    Artifact,
}

/// Result of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Routes were recovered and the manifest was written.
    Extracted {
        /// Number of route paths written.
        count: usize,
        /// The strategy that succeeded.
        strategy: Strategy,
    },
    /// Both strategies exhausted. No manifest written; not a failure.
    NoRoutes,
}

/// Build-time route extractor for one plugin.
#[derive(Debug, Clone)]
pub struct RouteExtractor {
    /// Plugin frontend source file, scanned by strategy 1.
    source_path: Option<PathBuf>,
    /// Built artifact, loaded by strategy 2.
    bundle_path: Option<PathBuf>,
    /// Where to write `routes.json`.
    output_path: PathBuf,
}

impl RouteExtractor {
    /// Creates an extractor writing to the given manifest path.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: None,
            bundle_path: None,
            output_path: output_path.into(),
        }
    }

    /// Sets the source file for the static strategy.
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    /// Sets the built artifact for the fallback strategy.
    pub fn with_bundle(mut self, path: impl Into<PathBuf>) -> Self {
        self.bundle_path = Some(path.into());
        self
    }

    /// Runs the extraction.
    ///
    /// Only a failure to write an already-recovered manifest escalates as
    /// an error; every strategy miss degrades to [`ExtractionOutcome::NoRoutes`].
    pub fn run(&self) -> AppResult<ExtractionOutcome> {
        let (paths, strategy) = match self.recover_paths() {
            Some(found) => found,
            None => {
                warn!(
                    "Could not extract routes; make sure route_paths() returns a literal \
                     vec or a built bundle is present"
                );
                return Ok(ExtractionOutcome::NoRoutes);
            }
        };

        if paths.is_empty() {
            warn!("No routes found in plugin contribution");
            return Ok(ExtractionOutcome::NoRoutes);
        }

        let count = paths.len();
        RouteManifest::from_paths(paths).write(&self.output_path)?;

        info!(
            count,
            strategy = ?strategy,
            output = %self.output_path.display(),
            "Extracted route paths to manifest"
        );

        Ok(ExtractionOutcome::Extracted { count, strategy })
    }

    /// Strategy 1 then strategy 2, first hit wins.
    fn recover_paths(&self) -> Option<(Vec<String>, Strategy)> {
        if let Some(source) = &self.source_path
            && let Some(paths) = extract_from_source(source)
        {
            info!(
                count = paths.len(),
                "Extracted route path(s) from route_paths() source"
            );
            return Some((paths, Strategy::Source));
        }

        if let Some(bundle) = &self.bundle_path {
            // The artifact strategy executes plugin code; acceptable at
            // build time for plugins the host already trusts.
            if let Some(paths) = unsafe { extract_from_artifact(bundle) } {
                info!(count = paths.len(), "Extracted route path(s) from built bundle");
                return Some((paths, Strategy::Artifact));
            }
        }

        None
    }
}
