//! Lifecycle-unit trait implemented by plugin backend service units.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use plughub_core::error::AppError;
use plughub_core::result::AppResult;

use crate::registry::ServiceRegistry;

/// The object other units and host code call through, exposed by a unit
/// under its port name. Callers downcast to the concrete adapter type.
pub type Adapter = Arc<dyn Any + Send + Sync>;

/// Lifecycle state of a registered unit.
///
/// Transitions: `Constructed → Initialized → Destroyed`. No transition is
/// valid from `Destroyed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitState {
    /// Registered but not yet initialized. Not queryable.
    Constructed,
    /// Initialized and queryable through the registry.
    Initialized,
    /// Destroyed. Terminal.
    Destroyed,
}

/// Trait that all plugin backend service units must implement.
///
/// Units are constructed by their plugin (typically from a
/// [`DataSourceHandle`](plughub_core::DataSourceHandle) and an options
/// struct), registered into the [`ServiceRegistry`], and driven through
/// their lifecycle by the host.
///
/// `initialize` receives the shared registry and may look up *other*
/// units through it. Only units initialized earlier are visible; looking
/// up a unit that has not yet reached `Initialized` fails `NotFound`.
#[async_trait]
pub trait LifecycleUnit: Send + Sync + 'static {
    /// Stable unit name used in logs and error reports.
    fn unit_name(&self) -> &str;

    /// Called once, in registration order, with the shared registry.
    async fn initialize(&self, registry: &ServiceRegistry) -> AppResult<()>;

    /// Called once during host shutdown, in reverse initialization order.
    /// Must release any resources acquired during `initialize`.
    async fn destroy(&self) -> AppResult<()>;

    /// Returns the adapter other code should call through.
    ///
    /// Units that provide no adapter must leave the default in place: an
    /// explicit `Unsupported` error, never a silent empty value, so callers
    /// cannot mistake "this unit provides nothing" for a transient lookup
    /// failure.
    fn adapter(&self) -> AppResult<Adapter> {
        Err(AppError::unsupported(format!(
            "unit '{}' does not expose an adapter",
            self.unit_name()
        )))
    }

    /// Returns the port name under which the registry exposes the adapter.
    fn port_name(&self) -> AppResult<&str> {
        Err(AppError::unsupported(format!(
            "unit '{}' does not expose a port",
            self.unit_name()
        )))
    }
}
