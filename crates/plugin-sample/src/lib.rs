//! Sample plugin for the PlugHub extension protocol.
//!
//! A minimal but complete plugin: a side-effect-only backend lifecycle
//! unit, an HTTP endpoint group wired independently of the unit, and a
//! frontend contribution with one lazy route and two outlet entries. It
//! exists to exercise the protocol, not to do anything useful.

pub mod api;
pub mod frontend;
pub mod unit;
pub mod views;

#[cfg(feature = "dynamic")]
pub mod exports;

use std::sync::Arc;

use plughub_core::datasource::DataSourceHandle;
use plughub_sdk::prelude::PluginExport;

use crate::frontend::SampleFrontend;
use crate::unit::{SampleUnit, SampleUnitOptions};

/// Plugin identifier used for registration and contribution attribution.
pub const PLUGIN_ID: &str = "sample-plugin";

/// Assembles the full plugin export for host wiring.
pub fn export(data_source: DataSourceHandle, opts: SampleUnitOptions) -> PluginExport {
    PluginExport::new(PLUGIN_ID)
        .with_unit(SampleUnit::new(data_source, opts))
        .with_api_router(api::api_router())
        .with_frontend(Arc::new(SampleFrontend::new()))
}
