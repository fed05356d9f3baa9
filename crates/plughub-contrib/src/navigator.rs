//! Navigation over the route table: match, load, resolve, render.
//!
//! A navigation superseded by a newer one before it resolves has its result
//! discarded, not forcibly aborted — at-least-resolved, last-write-wins.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;
use tracing::{debug, warn};

use plughub_core::error::AppError;

use crate::component::ViewContext;
use crate::descriptor::RequestContext;
use crate::routes::RouteTable;

/// A successfully rendered route.
#[derive(Debug, Clone)]
pub struct RenderedRoute {
    /// The matched route pattern.
    pub pattern: String,
    /// Who contributed the route.
    pub contributor: String,
    /// Rendered markup.
    pub markup: String,
    /// Loader data, if the route has a loader.
    pub data: Option<Value>,
}

/// Outcome of one navigation.
#[derive(Debug)]
pub enum NavigationOutcome {
    /// The route rendered.
    Rendered(RenderedRoute),
    /// No route matched the path.
    NotFound {
        /// The unmatched path.
        path: String,
    },
    /// The loader or view factory failed. Scoped to this route; the rest
    /// of the table is unaffected.
    Failed {
        /// The navigated path.
        path: String,
        /// The underlying error.
        error: AppError,
    },
    /// A newer navigation started before this one resolved; the result
    /// was discarded.
    Superseded {
        /// The navigated path.
        path: String,
    },
}

/// Navigator over a composed route table.
pub struct Navigator<'a> {
    /// The route table, frozen after composition.
    table: &'a RouteTable,
    /// Monotonic navigation generation for stale-result discard.
    generation: AtomicU64,
}

impl<'a> Navigator<'a> {
    /// Creates a navigator over a composed table.
    pub fn new(table: &'a RouteTable) -> Self {
        Self {
            table,
            generation: AtomicU64::new(0),
        }
    }

    /// Navigates to a concrete path.
    ///
    /// Runs the route's loader (once per navigation), resolves the lazy
    /// view, and renders. Loader and factory failures are scoped to this
    /// route only.
    pub async fn navigate(&self, path: &str) -> NavigationOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(matched) = self.table.match_path(path) else {
            return NavigationOutcome::NotFound {
                path: path.to_string(),
            };
        };

        debug!(path, pattern = matched.entry.path(), "Navigating");

        let data = match matched.entry.loader() {
            Some(loader) => {
                let ctx = RequestContext {
                    path: path.to_string(),
                    params: matched.params.clone(),
                };
                match loader(ctx).await {
                    Ok(value) => Some(value),
                    Err(error) => {
                        warn!(path, error = %error, "Route loader failed");
                        return NavigationOutcome::Failed {
                            path: path.to_string(),
                            error,
                        };
                    }
                }
            }
            None => None,
        };

        if self.is_stale(generation) {
            return NavigationOutcome::Superseded {
                path: path.to_string(),
            };
        }

        let view = match matched.entry.view().resolve().await {
            Ok(view) => view,
            Err(error) => {
                warn!(path, error = %error, "Route view failed to resolve");
                return NavigationOutcome::Failed {
                    path: path.to_string(),
                    error,
                };
            }
        };

        if self.is_stale(generation) {
            return NavigationOutcome::Superseded {
                path: path.to_string(),
            };
        }

        let markup = view.render(&ViewContext {
            params: matched.params,
            data: data.clone(),
        });

        NavigationOutcome::Rendered(RenderedRoute {
            pattern: matched.entry.path().to_string(),
            contributor: matched.entry.contributor().to_string(),
            markup,
            data,
        })
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }
}
