//! Named outlet slots — host-defined extension points plugins inject
//! content into.
//!
//! The outlet-name set is open: a contribution to a name the host defines
//! no slot for is accepted and retained, it is simply never rendered.
//! Contributions to one name from all plugins are concatenated in
//! plugin-registration order and rendered in sequence; the host never
//! merges or deduplicates entries, identical or not.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use plughub_core::error::AppError;

use crate::component::ViewContext;
use crate::descriptor::OutletContribution;
use crate::lazy::LazyView;

/// One aggregated slot entry.
#[derive(Debug)]
struct SlotEntry {
    /// The contributing plugin.
    contributor: String,
    /// The entry content.
    content: SlotContent,
}

#[derive(Debug)]
enum SlotContent {
    Data(Value),
    View(Arc<LazyView>),
}

/// One rendered entry of an outlet's sequence.
#[derive(Debug)]
pub enum RenderedFragment {
    /// A static data payload, passed through as-is.
    Data {
        /// The contributing plugin.
        contributor: String,
        /// The payload.
        value: Value,
    },
    /// A resolved and rendered view payload.
    Markup {
        /// The contributing plugin.
        contributor: String,
        /// Rendered markup.
        markup: String,
    },
    /// A view payload whose factory failed. Scoped to this entry; the
    /// rest of the slot still renders.
    Failed {
        /// The contributing plugin.
        contributor: String,
        /// The underlying error.
        error: AppError,
    },
}

impl RenderedFragment {
    /// The plugin that contributed this entry.
    pub fn contributor(&self) -> &str {
        match self {
            Self::Data { contributor, .. }
            | Self::Markup { contributor, .. }
            | Self::Failed { contributor, .. } => contributor,
        }
    }
}

/// Aggregated outlet contributions for one host instance.
#[derive(Debug, Default)]
pub struct OutletSlots {
    /// Outlet name → ordered entries.
    slots: BTreeMap<String, Vec<SlotEntry>>,
}

impl OutletSlots {
    /// Creates an empty slot map.
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Appends a plugin's contributions to an outlet, preserving
    /// registration order. View payloads are wrapped for at-most-once
    /// resolution here.
    pub fn contribute(
        &mut self,
        contributor: &str,
        outlet: &str,
        contributions: Vec<OutletContribution>,
    ) {
        let entries = self.slots.entry(outlet.to_string()).or_default();

        for contribution in contributions {
            let content = match contribution {
                OutletContribution::Data(value) => SlotContent::Data(value),
                OutletContribution::View(factory) => {
                    SlotContent::View(Arc::new(LazyView::new(factory)))
                }
            };
            entries.push(SlotEntry {
                contributor: contributor.to_string(),
                content,
            });
        }

        info!(contributor, outlet, "Outlet contribution registered");
    }

    /// Renders an outlet's full ordered sequence.
    ///
    /// View factories resolve at most once per session; a failing entry
    /// yields a `Failed` fragment without affecting its neighbors. An
    /// unknown outlet renders as an empty sequence.
    pub async fn render(&self, outlet: &str, ctx: &ViewContext) -> Vec<RenderedFragment> {
        let Some(entries) = self.slots.get(outlet) else {
            return Vec::new();
        };

        let mut fragments = Vec::with_capacity(entries.len());

        for entry in entries {
            let fragment = match &entry.content {
                SlotContent::Data(value) => RenderedFragment::Data {
                    contributor: entry.contributor.clone(),
                    value: value.clone(),
                },
                SlotContent::View(lazy) => match lazy.resolve().await {
                    Ok(view) => RenderedFragment::Markup {
                        contributor: entry.contributor.clone(),
                        markup: view.render(ctx),
                    },
                    Err(error) => {
                        warn!(
                            outlet,
                            contributor = %entry.contributor,
                            error = %error,
                            "Outlet view failed to resolve"
                        );
                        RenderedFragment::Failed {
                            contributor: entry.contributor.clone(),
                            error,
                        }
                    }
                },
            };
            fragments.push(fragment);
        }

        fragments
    }

    /// All outlet names that received at least one contribution.
    pub fn outlet_names(&self) -> Vec<&str> {
        self.slots.keys().map(String::as_str).collect()
    }

    /// Number of entries aggregated for an outlet.
    pub fn entry_count(&self, outlet: &str) -> usize {
        self.slots.get(outlet).map_or(0, Vec::len)
    }
}
