//! Service registry — stores lifecycle units, resolves cross-unit lookups,
//! and drives ordered initialization and teardown.
//!
//! Initialization is strictly sequential in registration order: a unit's
//! `initialize` may look up any unit registered (and therefore initialized)
//! before it, and will get `NotFound` for any unit after it. Teardown runs
//! in reverse order and collects failures instead of short-circuiting, so
//! one faulty unit cannot leak the resources held by the others.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use plughub_core::error::AppError;
use plughub_core::result::AppResult;

use crate::unit::{Adapter, LifecycleUnit, UnitState};

/// Reported when `initialize_all` aborts.
///
/// Carries the identity of the failing unit and the units already left in
/// `Initialized` state, so the caller can decide whether to roll back.
#[derive(Debug, Error)]
#[error("unit '{unit}' failed to initialize: {error}")]
pub struct InitFailure {
    /// Name of the unit whose `initialize` failed.
    pub unit: String,
    /// The underlying error.
    pub error: AppError,
    /// Units that reached `Initialized` before the failure, in order.
    pub initialized: Vec<String>,
}

impl From<InitFailure> for AppError {
    fn from(failure: InitFailure) -> Self {
        AppError::initialization(failure.to_string())
    }
}

/// A single collected teardown failure from `destroy_all`.
#[derive(Debug, Error)]
#[error("unit '{unit}' failed to destroy: {error}")]
pub struct DestroyFailure {
    /// Name of the unit whose `destroy` failed.
    pub unit: String,
    /// The underlying error.
    pub error: AppError,
}

/// One registered unit.
struct Slot {
    /// Concrete unit type, used for duplicate detection and typed lookup.
    type_id: TypeId,
    /// Fully qualified type name, used in error messages.
    type_name: &'static str,
    /// The unit's declared name, used in logs and reports.
    unit_name: String,
    /// The unit as a lifecycle participant.
    lifecycle: Arc<dyn LifecycleUnit>,
    /// The same unit, kept downcastable for typed `get`.
    typed: Arc<dyn Any + Send + Sync>,
    /// Current lifecycle state.
    state: UnitState,
}

impl std::fmt::Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("type_name", &self.type_name)
            .field("unit_name", &self.unit_name)
            .field("state", &self.state)
            .finish()
    }
}

/// Registry of all lifecycle units for one host instance.
///
/// Constructed once per host process and passed by reference into every
/// unit's `initialize` — there is no ambient/global registry.
#[derive(Default)]
pub struct ServiceRegistry {
    /// Units in registration order.
    slots: RwLock<Vec<Slot>>,
    /// Port name → adapter, populated as units initialize.
    ports: RwLock<HashMap<String, Adapter>>,
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("slots", &self.slots)
            .finish_non_exhaustive()
    }
}

impl ServiceRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(Vec::new()),
            ports: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a unit in `Constructed` state.
    ///
    /// Fails with a conflict if a unit of the same type is already
    /// registered; the existing unit is never overwritten.
    pub async fn register<U: LifecycleUnit>(&self, unit: U) -> AppResult<()> {
        let type_id = TypeId::of::<U>();
        let type_name = std::any::type_name::<U>();
        let unit_name = unit.unit_name().to_string();

        let mut slots = self.slots.write().await;

        if slots.iter().any(|s| s.type_id == type_id) {
            return Err(AppError::conflict(format!(
                "unit type '{type_name}' is already registered"
            )));
        }

        info!(unit = %unit_name, unit_type = type_name, "Registering lifecycle unit");

        let unit = Arc::new(unit);
        slots.push(Slot {
            type_id,
            type_name,
            unit_name,
            lifecycle: unit.clone(),
            typed: unit,
            state: UnitState::Constructed,
        });

        Ok(())
    }

    /// Initializes every registered unit, strictly sequentially, in
    /// registration order.
    ///
    /// Aborts on the first failure, reporting which unit failed and which
    /// units were already initialized.
    pub async fn initialize_all(&self) -> Result<(), InitFailure> {
        let pending: Vec<(usize, String, Arc<dyn LifecycleUnit>)> = {
            let slots = self.slots.read().await;
            slots
                .iter()
                .enumerate()
                .filter(|(_, s)| s.state == UnitState::Constructed)
                .map(|(i, s)| (i, s.unit_name.clone(), s.lifecycle.clone()))
                .collect()
        };

        let mut initialized = Vec::new();

        for (index, unit_name, unit) in pending {
            if let Err(error) = unit.initialize(self).await {
                return Err(InitFailure {
                    unit: unit_name,
                    error,
                    initialized,
                });
            }

            {
                let mut slots = self.slots.write().await;
                slots[index].state = UnitState::Initialized;
            }

            self.index_port(unit.as_ref()).await;

            info!(unit = %unit_name, "Lifecycle unit initialized");
            initialized.push(unit_name);
        }

        Ok(())
    }

    /// Destroys all units in reverse registration order.
    ///
    /// Every unit not yet destroyed is visited exactly once; individual
    /// failures are collected, not short-circuited. Calling this twice is
    /// safe — the second call finds nothing left to destroy.
    pub async fn destroy_all(&self) -> Vec<DestroyFailure> {
        let pending: Vec<(usize, String, Arc<dyn LifecycleUnit>)> = {
            let slots = self.slots.read().await;
            slots
                .iter()
                .enumerate()
                .rev()
                .filter(|(_, s)| s.state != UnitState::Destroyed)
                .map(|(i, s)| (i, s.unit_name.clone(), s.lifecycle.clone()))
                .collect()
        };

        let mut failures = Vec::new();

        for (index, unit_name, unit) in pending {
            if let Err(error) = unit.destroy().await {
                warn!(unit = %unit_name, error = %error, "Lifecycle unit destroy failed");
                failures.push(DestroyFailure {
                    unit: unit_name.clone(),
                    error,
                });
            } else {
                info!(unit = %unit_name, "Lifecycle unit destroyed");
            }

            let mut slots = self.slots.write().await;
            slots[index].state = UnitState::Destroyed;
        }

        self.ports.write().await.clear();

        failures
    }

    /// Returns the initialized unit of the requested type.
    ///
    /// Fails `NotFound`, naming the requested type, if the unit is not
    /// registered or has not yet reached `Initialized` — reading an
    /// uninitialized unit is a programming error in the caller, not a
    /// recoverable runtime condition.
    pub async fn get<U: LifecycleUnit>(&self) -> AppResult<Arc<U>> {
        let type_id = TypeId::of::<U>();
        let type_name = std::any::type_name::<U>();

        let slots = self.slots.read().await;
        let slot = slots
            .iter()
            .find(|s| s.type_id == type_id)
            .ok_or_else(|| AppError::not_found(format!("unit '{type_name}' is not registered")))?;

        if slot.state != UnitState::Initialized {
            return Err(AppError::not_found(format!(
                "unit '{type_name}' is not initialized"
            )));
        }

        slot.typed
            .clone()
            .downcast::<U>()
            .map_err(|_| AppError::internal(format!("unit '{type_name}' failed to downcast")))
    }

    /// Looks up an adapter by port name across all initialized units.
    pub async fn get_port(&self, port: &str) -> AppResult<Adapter> {
        let ports = self.ports.read().await;
        ports
            .get(port)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("no initialized unit exposes port '{port}'")))
    }

    /// Names of all registered units, in registration order.
    pub async fn unit_names(&self) -> Vec<String> {
        let slots = self.slots.read().await;
        slots.iter().map(|s| s.unit_name.clone()).collect()
    }

    /// Number of registered units.
    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    /// Whether the registry is empty.
    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }

    /// Indexes a freshly initialized unit's adapter under its port name.
    async fn index_port(&self, unit: &dyn LifecycleUnit) {
        let Ok(port) = unit.port_name() else {
            return;
        };

        match unit.adapter() {
            Ok(adapter) => {
                let mut ports = self.ports.write().await;
                if ports.insert(port.to_string(), adapter).is_some() {
                    warn!(port, unit = %unit.unit_name(), "Port name shadows an earlier unit's port");
                }
            }
            Err(e) => {
                warn!(
                    port,
                    unit = %unit.unit_name(),
                    error = %e,
                    "Unit declares a port but returned no adapter"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use plughub_core::error::ErrorKind;
    use std::sync::Mutex;

    type EventLog = Arc<Mutex<Vec<String>>>;

    fn push(log: &EventLog, event: impl Into<String>) {
        log.lock().unwrap().push(event.into());
    }

    /// Exposes an adapter under the "alpha" port.
    #[derive(Debug)]
    struct AlphaUnit {
        log: EventLog,
        api: Arc<AlphaApi>,
    }

    #[derive(Debug)]
    struct AlphaApi {
        greeting: String,
    }

    impl AlphaUnit {
        fn new(log: EventLog) -> Self {
            Self {
                log,
                api: Arc::new(AlphaApi {
                    greeting: "hello from alpha".to_string(),
                }),
            }
        }
    }

    #[async_trait]
    impl LifecycleUnit for AlphaUnit {
        fn unit_name(&self) -> &str {
            "alpha"
        }

        async fn initialize(&self, _registry: &ServiceRegistry) -> AppResult<()> {
            push(&self.log, "alpha:init");
            Ok(())
        }

        async fn destroy(&self) -> AppResult<()> {
            push(&self.log, "alpha:destroy");
            Ok(())
        }

        fn adapter(&self) -> AppResult<Adapter> {
            Ok(self.api.clone())
        }

        fn port_name(&self) -> AppResult<&str> {
            Ok("alpha")
        }
    }

    /// Looks up peers during its own initialize.
    #[derive(Debug)]
    struct BetaUnit {
        log: EventLog,
    }

    #[async_trait]
    impl LifecycleUnit for BetaUnit {
        fn unit_name(&self) -> &str {
            "beta"
        }

        async fn initialize(&self, registry: &ServiceRegistry) -> AppResult<()> {
            push(&self.log, "beta:init");

            // Earlier peer is visible.
            let alpha = registry.get::<AlphaUnit>().await;
            push(
                &self.log,
                format!("beta:sees-alpha={}", alpha.is_ok()),
            );

            // Later peer is not.
            let gamma = registry.get::<GammaUnit>().await;
            push(
                &self.log,
                format!(
                    "beta:gamma-kind={:?}",
                    gamma.err().map(|e| e.kind)
                ),
            );

            Ok(())
        }

        async fn destroy(&self) -> AppResult<()> {
            push(&self.log, "beta:destroy");
            Ok(())
        }
    }

    /// Side-effect-only unit with no adapter or port.
    #[derive(Debug)]
    struct GammaUnit {
        log: EventLog,
        fail_destroy: bool,
    }

    #[async_trait]
    impl LifecycleUnit for GammaUnit {
        fn unit_name(&self) -> &str {
            "gamma"
        }

        async fn initialize(&self, _registry: &ServiceRegistry) -> AppResult<()> {
            push(&self.log, "gamma:init");
            Ok(())
        }

        async fn destroy(&self) -> AppResult<()> {
            push(&self.log, "gamma:destroy");
            if self.fail_destroy {
                return Err(AppError::destroy("gamma teardown exploded"));
            }
            Ok(())
        }
    }

    #[derive(Debug)]
    struct FailingUnit;

    #[async_trait]
    impl LifecycleUnit for FailingUnit {
        fn unit_name(&self) -> &str {
            "failing"
        }

        async fn initialize(&self, _registry: &ServiceRegistry) -> AppResult<()> {
            Err(AppError::internal("boom"))
        }

        async fn destroy(&self) -> AppResult<()> {
            Ok(())
        }
    }

    fn new_log() -> EventLog {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[tokio::test]
    async fn test_duplicate_type_registration_fails() {
        let log = new_log();
        let registry = ServiceRegistry::new();

        registry.register(AlphaUnit::new(log.clone())).await.unwrap();
        let err = registry
            .register(AlphaUnit::new(log))
            .await
            .expect_err("duplicate registration must fail");

        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_initialize_all_runs_in_registration_order() {
        let log = new_log();
        let registry = ServiceRegistry::new();

        registry.register(AlphaUnit::new(log.clone())).await.unwrap();
        registry.register(BetaUnit { log: log.clone() }).await.unwrap();
        registry
            .register(GammaUnit {
                log: log.clone(),
                fail_destroy: false,
            })
            .await
            .unwrap();

        registry.initialize_all().await.unwrap();

        let events = log.lock().unwrap().clone();
        assert_eq!(events[0], "alpha:init");
        assert_eq!(events[1], "beta:init");
        assert!(events.contains(&"gamma:init".to_string()));
    }

    #[tokio::test]
    async fn test_cross_unit_lookup_respects_initialization_order() {
        let log = new_log();
        let registry = ServiceRegistry::new();

        registry.register(AlphaUnit::new(log.clone())).await.unwrap();
        registry.register(BetaUnit { log: log.clone() }).await.unwrap();
        registry
            .register(GammaUnit {
                log: log.clone(),
                fail_destroy: false,
            })
            .await
            .unwrap();

        registry.initialize_all().await.unwrap();

        let events = log.lock().unwrap().clone();
        assert!(events.contains(&"beta:sees-alpha=true".to_string()));
        assert!(events.contains(&"beta:gamma-kind=Some(NotFound)".to_string()));
    }

    #[tokio::test]
    async fn test_get_before_initialize_fails_not_found() {
        let log = new_log();
        let registry = ServiceRegistry::new();

        registry.register(AlphaUnit::new(log)).await.unwrap();

        let err = registry.get::<AlphaUnit>().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(err.message.contains("AlphaUnit"));
    }

    #[tokio::test]
    async fn test_get_unregistered_fails_not_found_naming_type() {
        let registry = ServiceRegistry::new();
        let err = registry.get::<AlphaUnit>().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(err.message.contains("AlphaUnit"));
    }

    #[tokio::test]
    async fn test_initialize_failure_reports_unit_and_survivors() {
        let log = new_log();
        let registry = ServiceRegistry::new();

        registry.register(AlphaUnit::new(log.clone())).await.unwrap();
        registry.register(FailingUnit).await.unwrap();
        registry
            .register(GammaUnit {
                log: log.clone(),
                fail_destroy: false,
            })
            .await
            .unwrap();

        let failure = registry.initialize_all().await.unwrap_err();
        assert_eq!(failure.unit, "failing");
        assert_eq!(failure.initialized, vec!["alpha".to_string()]);

        // Gamma was never reached.
        let events = log.lock().unwrap().clone();
        assert!(!events.contains(&"gamma:init".to_string()));
    }

    #[tokio::test]
    async fn test_destroy_all_visits_every_unit_and_collects_failures() {
        let log = new_log();
        let registry = ServiceRegistry::new();

        registry.register(AlphaUnit::new(log.clone())).await.unwrap();
        registry
            .register(GammaUnit {
                log: log.clone(),
                fail_destroy: true,
            })
            .await
            .unwrap();

        registry.initialize_all().await.unwrap();

        let failures = registry.destroy_all().await;
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].unit, "gamma");

        // Reverse order: gamma before alpha, and alpha still destroyed
        // despite gamma's failure.
        let events = log.lock().unwrap().clone();
        let gamma_pos = events.iter().position(|e| e == "gamma:destroy").unwrap();
        let alpha_pos = events.iter().position(|e| e == "alpha:destroy").unwrap();
        assert!(gamma_pos < alpha_pos);

        // Second teardown is a no-op.
        let failures = registry.destroy_all().await;
        assert!(failures.is_empty());
        let destroy_count = log
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.ends_with(":destroy"))
            .count();
        assert_eq!(destroy_count, 2);
    }

    #[tokio::test]
    async fn test_port_lookup_returns_adapter() {
        let log = new_log();
        let registry = ServiceRegistry::new();

        registry.register(AlphaUnit::new(log)).await.unwrap();
        registry.initialize_all().await.unwrap();

        let adapter = registry.get_port("alpha").await.unwrap();
        let api = adapter.downcast::<AlphaApi>().unwrap();
        assert_eq!(api.greeting, "hello from alpha");

        let err = registry.get_port("missing").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_portless_unit_fails_unsupported_not_silently() {
        let log = new_log();
        let unit = GammaUnit {
            log,
            fail_destroy: false,
        };

        let err = unit.adapter().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unsupported);
        assert!(err.message.contains("gamma"));

        let err = unit.port_name().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unsupported);
    }
}
