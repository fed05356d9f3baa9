//! Backend lifecycle wiring: export bundle → registry → ordered
//! init/teardown, with cross-unit lookup against the sample plugin.

use std::sync::Mutex;

use async_trait::async_trait;

use plughub_core::datasource::DataSourceHandle;
use plughub_core::error::ErrorKind;
use plughub_core::result::AppResult;
use plughub_registry::registry::ServiceRegistry;
use plughub_registry::unit::LifecycleUnit;
use plugin_sample::unit::{SampleUnit, SampleUnitOptions};

fn sample_export() -> plughub_sdk::prelude::PluginExport {
    plugin_sample::export(
        DataSourceHandle::new("test-db", "postgres://localhost/test"),
        SampleUnitOptions {
            log_lifecycle: false,
        },
    )
}

/// A host-side unit that depends on the sample plugin's unit.
#[derive(Debug)]
struct AuditUnit {
    seen_sample: Mutex<Option<bool>>,
}

#[async_trait]
impl LifecycleUnit for AuditUnit {
    fn unit_name(&self) -> &str {
        "audit"
    }

    async fn initialize(&self, registry: &ServiceRegistry) -> AppResult<()> {
        let sample = registry.get::<SampleUnit>().await;
        *self.seen_sample.lock().unwrap() = Some(sample.is_ok());
        Ok(())
    }

    async fn destroy(&self) -> AppResult<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_export_bundle_wires_unit_through_full_lifecycle() {
    let registry = ServiceRegistry::new();

    let mut export = sample_export();
    export.register_units(&registry).await.unwrap();

    // Registered earlier, so visible to the audit unit's initialize.
    registry
        .register(AuditUnit {
            seen_sample: Mutex::new(None),
        })
        .await
        .unwrap();

    registry.initialize_all().await.unwrap();

    let audit = registry.get::<AuditUnit>().await.unwrap();
    assert_eq!(*audit.seen_sample.lock().unwrap(), Some(true));

    let sample = registry.get::<SampleUnit>().await.unwrap();
    assert_eq!(sample.unit_name(), "sample-unit");

    assert!(registry.destroy_all().await.is_empty());
}

#[tokio::test]
async fn test_registering_same_plugin_twice_fails() {
    let registry = ServiceRegistry::new();

    sample_export().register_units(&registry).await.unwrap();
    let err = sample_export()
        .register_units(&registry)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Conflict);
    assert!(err.message.contains("SampleUnit"));
}

#[tokio::test]
async fn test_sample_unit_exposes_no_adapter_or_port() {
    let registry = ServiceRegistry::new();
    sample_export().register_units(&registry).await.unwrap();
    registry.initialize_all().await.unwrap();

    let sample = registry.get::<SampleUnit>().await.unwrap();

    assert_eq!(sample.adapter().unwrap_err().kind, ErrorKind::Unsupported);
    assert_eq!(sample.port_name().unwrap_err().kind, ErrorKind::Unsupported);
    assert_eq!(
        registry.get_port("sample").await.unwrap_err().kind,
        ErrorKind::NotFound
    );
}
