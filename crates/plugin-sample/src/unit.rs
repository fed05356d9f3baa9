//! Sample backend lifecycle unit.
//!
//! A minimal unit valid only for its initialize/destroy side effects: it
//! exposes no adapter and no port, so both accessors surface the explicit
//! `Unsupported` condition from the trait defaults.

use async_trait::async_trait;
use tracing::info;

use plughub_core::datasource::DataSourceHandle;
use plughub_core::result::AppResult;
use plughub_registry::registry::ServiceRegistry;
use plughub_registry::unit::LifecycleUnit;

/// Options accepted by the sample unit's constructor.
#[derive(Debug, Clone)]
pub struct SampleUnitOptions {
    /// Whether to log lifecycle transitions.
    pub log_lifecycle: bool,
}

impl Default for SampleUnitOptions {
    fn default() -> Self {
        Self {
            log_lifecycle: true,
        }
    }
}

/// The sample plugin's backend service unit.
#[derive(Debug)]
pub struct SampleUnit {
    /// Host data-source handle, held but never opened by this unit.
    data_source: DataSourceHandle,
    /// Constructor options.
    opts: SampleUnitOptions,
}

impl SampleUnit {
    /// Constructs the unit. Registration and initialization are the
    /// host's responsibility.
    pub fn new(data_source: DataSourceHandle, opts: SampleUnitOptions) -> Self {
        if opts.log_lifecycle {
            info!(data_source = data_source.name(), "SampleUnit constructed");
        }
        Self { data_source, opts }
    }

    /// The data source this unit was constructed with.
    pub fn data_source(&self) -> &DataSourceHandle {
        &self.data_source
    }
}

#[async_trait]
impl LifecycleUnit for SampleUnit {
    fn unit_name(&self) -> &str {
        "sample-unit"
    }

    async fn initialize(&self, _registry: &ServiceRegistry) -> AppResult<()> {
        if self.opts.log_lifecycle {
            info!("SampleUnit initialized");
        }
        // Other units are reachable here via the registry if this plugin
        // ever grows a dependency on one.
        Ok(())
    }

    async fn destroy(&self) -> AppResult<()> {
        if self.opts.log_lifecycle {
            info!("SampleUnit destroyed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plughub_core::error::ErrorKind;

    fn make_unit() -> SampleUnit {
        SampleUnit::new(
            DataSourceHandle::new("test-db", "postgres://localhost/test"),
            SampleUnitOptions {
                log_lifecycle: false,
            },
        )
    }

    #[tokio::test]
    async fn test_full_lifecycle_through_registry() {
        let registry = ServiceRegistry::new();
        registry.register(make_unit()).await.unwrap();
        registry.initialize_all().await.unwrap();

        let unit = registry.get::<SampleUnit>().await.unwrap();
        assert_eq!(unit.unit_name(), "sample-unit");
        assert_eq!(unit.data_source().name(), "test-db");

        assert!(registry.destroy_all().await.is_empty());
    }

    #[test]
    fn test_adapter_and_port_are_unsupported() {
        let unit = make_unit();

        let err = unit.adapter().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unsupported);
        assert!(err.message.contains("sample-unit"));

        let err = unit.port_name().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unsupported);
    }
}
