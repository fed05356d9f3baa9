//! Frontend contribution host — splices each plugin's declared routes and
//! outlet content into the host's live route table and UI slots.

use tracing::info;

use plughub_core::result::AppResult;

use crate::descriptor::{FrontendContribution, RouteDescriptor};
use crate::navigator::Navigator;
use crate::outlets::OutletSlots;
use crate::routes::RouteTable;

/// The host-side aggregation point for frontend contributions.
///
/// Composition is a synchronous, one-shot step per plugin load, performed
/// only during startup/registration windows. Actual view code stays
/// unloaded until first navigation or first slot render.
#[derive(Debug, Default)]
pub struct ContributionHost {
    /// The live route table.
    routes: RouteTable,
    /// Named outlet slots.
    outlets: OutletSlots,
}

impl ContributionHost {
    /// Creates an empty host.
    pub fn new() -> Self {
        Self {
            routes: RouteTable::new(),
            outlets: OutletSlots::new(),
        }
    }

    /// Mounts the host application's own routes.
    ///
    /// Host routes go through the same collision check as plugin routes,
    /// so host-vs-plugin and plugin-vs-plugin collisions fail identically.
    pub fn mount_host_routes(&mut self, routes: Vec<RouteDescriptor>) -> AppResult<()> {
        self.routes.mount("host", routes)
    }

    /// Splices one plugin's full frontend contribution in.
    ///
    /// Fails fast on route collision; outlet contributions are appended in
    /// plugin-registration order.
    pub fn mount_plugin(
        &mut self,
        plugin_id: &str,
        contribution: &dyn FrontendContribution,
    ) -> AppResult<()> {
        let routes = contribution.routes();
        let route_count = routes.len();
        self.routes.mount(plugin_id, routes)?;

        let outlets = contribution.outlets();
        let outlet_count = outlets.len();
        for (outlet, entries) in outlets {
            self.outlets.contribute(plugin_id, &outlet, entries);
        }

        info!(
            plugin_id,
            routes = route_count,
            outlets = outlet_count,
            "Plugin frontend contribution mounted"
        );

        Ok(())
    }

    /// The composed route table.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The composed outlet slots.
    pub fn outlets(&self) -> &OutletSlots {
        &self.outlets
    }

    /// A navigator over the composed table.
    pub fn navigator(&self) -> Navigator<'_> {
        Navigator::new(&self.routes)
    }
}
