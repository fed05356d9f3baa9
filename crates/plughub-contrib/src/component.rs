//! View boundary between the protocol and the host's UI library.
//!
//! The UI library itself is out of scope; at this layer a view is anything
//! that renders to markup text given the navigation context.

use std::collections::HashMap;

use serde_json::Value;

/// Context handed to a view when it renders.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    /// Matched route parameters (`:name` segments), empty for outlet views.
    pub params: HashMap<String, String>,
    /// Data produced by the route's loader, if any.
    pub data: Option<Value>,
}

impl ViewContext {
    /// Returns a matched route parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// A renderable UI fragment contributed by a plugin.
pub trait View: Send + Sync {
    /// Renders the view to markup text.
    fn render(&self, ctx: &ViewContext) -> String;
}
