//! Opaque data-source handle passed to plugin lifecycle units.
//!
//! The host owns its actual data layer; plugins receive only this handle
//! at construction time. A unit that needs real persistence resolves it
//! through an adapter looked up in the service registry, never by opening
//! the data source itself.

use serde::{Deserialize, Serialize};

/// Handle to the host's data source.
///
/// Cheap to clone. The DSN is never parsed by this crate; it is carried
/// through to whichever unit adapter chooses to interpret it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceHandle {
    /// Logical name of the data source (used in logs).
    name: String,
    /// Connection string, opaque at this layer.
    dsn: String,
}

impl DataSourceHandle {
    /// Creates a new handle.
    pub fn new(name: impl Into<String>, dsn: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dsn: dsn.into(),
        }
    }

    /// Returns the logical name of the data source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the opaque connection string.
    pub fn dsn(&self) -> &str {
        &self.dsn
    }
}
