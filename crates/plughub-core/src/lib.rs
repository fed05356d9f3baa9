//! # plughub-core
//!
//! Core crate for PlugHub. Contains configuration schemas, the opaque
//! data-source handle passed to plugin lifecycle units, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other PlugHub crates.

pub mod config;
pub mod datasource;
pub mod error;
pub mod result;

pub use datasource::DataSourceHandle;
pub use error::AppError;
pub use result::AppResult;
