//! `extern "C"` exports for dynamic loading of the built artifact.
//!
//! The extractor's fallback strategy probes `plugin_route_paths` first and
//! `plugin_contribution` second. Ownership of the returned allocations
//! transfers to the caller.

use plughub_contrib::descriptor::FrontendContribution;

use crate::frontend::SampleFrontend;

/// Paths-only query, callable without constructing any view code.
#[unsafe(no_mangle)]
pub extern "C" fn plugin_route_paths() -> *mut Vec<String> {
    Box::into_raw(Box::new(SampleFrontend::new().route_paths()))
}

/// Full-contribution constructor.
#[unsafe(no_mangle)]
pub extern "C" fn plugin_contribution() -> *mut dyn FrontendContribution {
    Box::into_raw(Box::new(SampleFrontend::new()))
}
