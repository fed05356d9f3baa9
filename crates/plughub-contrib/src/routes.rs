//! Collision-checked route table with `:name` pattern matching.
//!
//! The table is mutated only during host startup and plugin-registration
//! windows, never concurrently with request handling, so it holds no lock.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use plughub_core::error::AppError;
use plughub_core::result::AppResult;

use crate::descriptor::{Loader, RouteDescriptor};
use crate::lazy::LazyView;

/// One mounted route.
pub struct RouteEntry {
    /// Who contributed this route (plugin id or the host itself).
    contributor: String,
    /// Route pattern.
    path: String,
    /// Memoized lazy view.
    view: Arc<LazyView>,
    /// Optional per-navigation loader.
    loader: Option<Loader>,
}

impl RouteEntry {
    /// The contributor that mounted this route.
    pub fn contributor(&self) -> &str {
        &self.contributor
    }

    /// The route pattern.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The memoized view.
    pub fn view(&self) -> &Arc<LazyView> {
        &self.view
    }

    /// The loader, if any.
    pub fn loader(&self) -> Option<&Loader> {
        self.loader.as_ref()
    }
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("contributor", &self.contributor)
            .field("path", &self.path)
            .field("loader", &self.loader.as_ref().map(|_| "<loader>"))
            .finish()
    }
}

/// A successful match of a concrete path against the table.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    /// The matched entry.
    pub entry: &'a RouteEntry,
    /// Captured `:name` segment values.
    pub params: HashMap<String, String>,
}

/// The host's live route table.
///
/// Host-native routes and plugin routes mount through the same call, so
/// both collision classes fail identically at composition time.
#[derive(Debug, Default)]
pub struct RouteTable {
    /// Entries in mount order.
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a contributor's routes.
    ///
    /// Validates every pattern against the route grammar and checks the
    /// whole batch for path collisions — against the table and within the
    /// batch — before inserting anything. A collision is a configuration
    /// error and fails the composition, naming both contributors.
    pub fn mount(&mut self, contributor: &str, routes: Vec<RouteDescriptor>) -> AppResult<()> {
        for (i, descriptor) in routes.iter().enumerate() {
            validate_pattern(&descriptor.path)?;

            if let Some(existing) = self.entries.iter().find(|e| e.path == descriptor.path) {
                return Err(AppError::collision(format!(
                    "route path '{}' contributed by both '{}' and '{}'",
                    descriptor.path, existing.contributor, contributor
                )));
            }

            if routes[..i].iter().any(|r| r.path == descriptor.path) {
                return Err(AppError::collision(format!(
                    "route path '{}' contributed twice by '{}'",
                    descriptor.path, contributor
                )));
            }
        }

        for descriptor in routes {
            info!(contributor, path = %descriptor.path, "Mounting route");
            self.entries.push(RouteEntry {
                contributor: contributor.to_string(),
                path: descriptor.path,
                view: Arc::new(LazyView::new(descriptor.view)),
                loader: descriptor.loader,
            });
        }

        Ok(())
    }

    /// Matches a concrete path against the table, first match wins.
    pub fn match_path(&self, concrete: &str) -> Option<RouteMatch<'_>> {
        self.entries.iter().find_map(|entry| {
            match_pattern(&entry.path, concrete).map(|params| RouteMatch { entry, params })
        })
    }

    /// All mounted paths, in mount order. This is the projection the
    /// build-time manifest must stay consistent with.
    pub fn paths(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }

    /// Number of mounted routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Checks a pattern against the host route grammar: leading slash,
/// non-empty segments, named segments prefixed with `:`.
fn validate_pattern(path: &str) -> AppResult<()> {
    if !path.starts_with('/') {
        return Err(AppError::validation(format!(
            "route path '{path}' must start with '/'"
        )));
    }

    if path == "/" {
        return Ok(());
    }

    for segment in path[1..].split('/') {
        if segment.is_empty() {
            return Err(AppError::validation(format!(
                "route path '{path}' contains an empty segment"
            )));
        }
        if segment == ":" {
            return Err(AppError::validation(format!(
                "route path '{path}' contains an unnamed ':' segment"
            )));
        }
    }

    Ok(())
}

/// Matches a concrete path against a pattern, capturing `:name` segments.
fn match_pattern(pattern: &str, concrete: &str) -> Option<HashMap<String, String>> {
    let pattern_segments: Vec<&str> = pattern.trim_start_matches('/').split('/').collect();
    let concrete_segments: Vec<&str> = concrete.trim_start_matches('/').split('/').collect();

    if pattern_segments.len() != concrete_segments.len() {
        return None;
    }

    let mut params = HashMap::new();

    for (p, c) in pattern_segments.iter().zip(&concrete_segments) {
        if let Some(name) = p.strip_prefix(':') {
            if c.is_empty() {
                return None;
            }
            params.insert(name.to_string(), (*c).to_string());
        } else if p != c {
            return None;
        }
    }

    Some(params)
}
