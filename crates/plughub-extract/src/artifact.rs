//! Built-artifact extraction strategy (feature-gated).
//!
//! Dynamically loads the plugin's compiled artifact and asks it for its
//! routes: the `plugin_route_paths` export is preferred, falling back to
//! `plugin_contribution` and projecting the `path` fields of the full
//! route descriptors.

#[cfg(feature = "dynamic")]
pub mod dynamic_artifact {
    use std::path::Path;

    use tracing::{debug, warn};

    use plughub_contrib::FrontendContribution;

    /// Exported by plugin artifacts that provide the cheap paths-only
    /// query. Ownership of the vec transfers to the caller.
    pub type RoutePathsFn = unsafe extern "C" fn() -> *mut Vec<String>;

    /// Exported by plugin artifacts as the full-contribution constructor.
    /// Ownership of the boxed contribution transfers to the caller.
    pub type CreateContributionFn = unsafe extern "C" fn() -> *mut dyn FrontendContribution;

    /// Attempts to recover route paths from a built plugin artifact.
    ///
    /// Returns `None` on any miss — artifact absent, unloadable, or
    /// exporting neither symbol. Never errors; the extractor treats every
    /// failure here as "no routes found."
    ///
    /// # Safety
    /// Loads and executes code from the artifact. Only build trusted
    /// plugins.
    pub unsafe fn extract_from_artifact(bundle_path: &Path) -> Option<Vec<String>> {
        if !bundle_path.exists() {
            warn!(path = %bundle_path.display(), "Bundle not found, skipping artifact strategy");
            return None;
        }

        let lib = match unsafe { libloading::Library::new(bundle_path) } {
            Ok(lib) => lib,
            Err(e) => {
                warn!(path = %bundle_path.display(), error = %e, "Bundle import failed");
                return None;
            }
        };

        if let Ok(route_paths) = unsafe { lib.get::<RoutePathsFn>(b"plugin_route_paths") } {
            debug!(path = %bundle_path.display(), "Loaded route paths from bundle");
            let paths = unsafe { Box::from_raw(route_paths()) };
            return Some(*paths);
        }

        if let Ok(create) = unsafe { lib.get::<CreateContributionFn>(b"plugin_contribution") } {
            debug!(path = %bundle_path.display(), "Loaded full contribution from bundle");
            let contribution = unsafe { Box::from_raw(create()) };
            return Some(contribution.routes().into_iter().map(|r| r.path).collect());
        }

        warn!(
            path = %bundle_path.display(),
            "Neither plugin_route_paths nor plugin_contribution exported by bundle"
        );
        None
    }
}

/// Stub strategy when the `dynamic` feature is not enabled.
#[cfg(not(feature = "dynamic"))]
pub mod dynamic_artifact {
    use std::path::Path;

    use tracing::warn;

    /// Always misses: dynamic artifact loading is compiled out.
    pub unsafe fn extract_from_artifact(bundle_path: &Path) -> Option<Vec<String>> {
        warn!(
            path = %bundle_path.display(),
            "Artifact strategy unavailable (built without the 'dynamic' feature)"
        );
        None
    }
}

pub use dynamic_artifact::extract_from_artifact;
