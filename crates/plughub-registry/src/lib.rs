//! # plughub-registry
//!
//! Backend side of the plugin extension protocol. Provides:
//!
//! - The [`LifecycleUnit`] capability trait plugins implement for their
//!   backend service units (construct → initialize → destroy)
//! - The [`ServiceRegistry`] that stores units, drives strictly ordered
//!   initialization and reverse-order teardown, and resolves cross-unit
//!   lookups by type or port name

pub mod registry;
pub mod unit;

pub use registry::{DestroyFailure, InitFailure, ServiceRegistry};
pub use unit::{Adapter, LifecycleUnit, UnitState};
