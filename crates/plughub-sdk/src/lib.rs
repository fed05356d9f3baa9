//! # plughub-sdk
//!
//! SDK for developing PlugHub plugins.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plughub_sdk::prelude::*;
//!
//! struct MyUnit;
//!
//! #[async_trait]
//! impl LifecycleUnit for MyUnit {
//!     fn unit_name(&self) -> &str {
//!         "my-unit"
//!     }
//!
//!     async fn initialize(&self, _registry: &ServiceRegistry) -> AppResult<()> {
//!         Ok(())
//!     }
//!
//!     async fn destroy(&self) -> AppResult<()> {
//!         Ok(())
//!     }
//! }
//! ```

pub mod exports;

/// Prelude for convenient imports.
pub mod prelude {
    pub use async_trait::async_trait;

    pub use plughub_core::datasource::DataSourceHandle;
    pub use plughub_core::error::AppError;
    pub use plughub_core::result::AppResult;

    pub use plughub_registry::registry::ServiceRegistry;
    pub use plughub_registry::unit::{Adapter, LifecycleUnit};

    pub use plughub_contrib::component::{View, ViewContext};
    pub use plughub_contrib::descriptor::{
        FrontendContribution, Loader, NavigationItem, OutletContribution, RequestContext,
        RouteDescriptor, ViewFactory,
    };

    pub use crate::exports::PluginExport;
}
