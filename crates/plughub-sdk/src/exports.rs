//! Export bundle a plugin hands to the host for wiring.
//!
//! One `PluginExport` describes everything a plugin contributes: backend
//! lifecycle units, an HTTP endpoint group, and a frontend contribution.
//! The backend endpoint group is wired independently of the lifecycle
//! units — a plugin may ship any subset of the three.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;

use plughub_contrib::descriptor::FrontendContribution;
use plughub_core::result::AppResult;
use plughub_registry::registry::ServiceRegistry;
use plughub_registry::unit::LifecycleUnit;

/// Deferred typed unit registration, erased so the bundle can carry units
/// of different concrete types.
#[async_trait]
trait UnitRegistrar: Send {
    async fn register_into(self: Box<Self>, registry: &ServiceRegistry) -> AppResult<()>;
}

#[async_trait]
impl<U: LifecycleUnit> UnitRegistrar for U {
    async fn register_into(self: Box<Self>, registry: &ServiceRegistry) -> AppResult<()> {
        registry.register(*self).await
    }
}

/// A fully assembled plugin, ready for host wiring.
pub struct PluginExport {
    /// Unique plugin identifier.
    plugin_id: String,
    /// Lifecycle units to register, in order.
    unit_registrars: Vec<Box<dyn UnitRegistrar>>,
    /// The plugin's backend endpoint group, if any.
    api_router: Option<Router>,
    /// The plugin's frontend contribution, if any.
    frontend: Option<Arc<dyn FrontendContribution>>,
}

impl PluginExport {
    /// Creates an empty export for a plugin.
    pub fn new(plugin_id: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            unit_registrars: Vec::new(),
            api_router: None,
            frontend: None,
        }
    }

    /// Adds a backend lifecycle unit.
    pub fn with_unit<U: LifecycleUnit>(mut self, unit: U) -> Self {
        self.unit_registrars.push(Box::new(unit));
        self
    }

    /// Adds the backend endpoint group.
    pub fn with_api_router(mut self, router: Router) -> Self {
        self.api_router = Some(router);
        self
    }

    /// Adds the frontend contribution.
    pub fn with_frontend(mut self, frontend: Arc<dyn FrontendContribution>) -> Self {
        self.frontend = Some(frontend);
        self
    }

    /// The plugin identifier.
    pub fn plugin_id(&self) -> &str {
        &self.plugin_id
    }

    /// Registers all carried units into the registry, in bundle order.
    pub async fn register_units(&mut self, registry: &ServiceRegistry) -> AppResult<()> {
        for registrar in self.unit_registrars.drain(..) {
            registrar.register_into(registry).await?;
        }
        Ok(())
    }

    /// Takes the backend endpoint group.
    pub fn take_api_router(&mut self) -> Option<Router> {
        self.api_router.take()
    }

    /// The frontend contribution.
    pub fn frontend(&self) -> Option<&Arc<dyn FrontendContribution>> {
        self.frontend.as_ref()
    }
}

impl std::fmt::Debug for PluginExport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginExport")
            .field("plugin_id", &self.plugin_id)
            .field("units", &self.unit_registrars.len())
            .field("api_router", &self.api_router.is_some())
            .field("frontend", &self.frontend.is_some())
            .finish()
    }
}
