//! Contribution descriptors — the pure data/factory shapes a plugin's
//! frontend artifact returns to the host.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use plughub_core::result::AppResult;

use crate::component::View;

/// Zero-argument factory producing a view asynchronously.
///
/// Must not be invoked until the route is actually matched or the outlet
/// actually rendered — plugin bundles may be large or may fail to load and
/// must not block host startup. The host wraps every factory in a memoizing
/// [`LazyView`](crate::lazy::LazyView) at mount time, so a factory runs at
/// most once per session.
pub type ViewFactory =
    Arc<dyn Fn() -> BoxFuture<'static, AppResult<Arc<dyn View>>> + Send + Sync>;

/// Data loader attached to a route. Executes once per navigation to a
/// matching route; its resolved value becomes available to the rendered
/// view.
pub type Loader =
    Arc<dyn Fn(RequestContext) -> BoxFuture<'static, AppResult<Value>> + Send + Sync>;

/// Request context passed to a route loader.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The concrete path that was navigated to.
    pub path: String,
    /// Matched route parameters (`:name` segments).
    pub params: HashMap<String, String>,
}

impl RequestContext {
    /// Returns a matched route parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// A plugin's declaration of one navigable route.
///
/// `path` follows the host route grammar: leading slash, named segments
/// prefixed with `:`. Uniqueness within one plugin's contribution is the
/// plugin's responsibility; uniqueness across plugins is checked by the
/// host at composition time.
#[derive(Clone)]
pub struct RouteDescriptor {
    /// Route pattern, e.g. `/org/:org_slug/plugin-feature`.
    pub path: String,
    /// Lazy factory for the route's view.
    pub view: ViewFactory,
    /// Optional per-navigation data loader.
    pub loader: Option<Loader>,
}

impl RouteDescriptor {
    /// Creates a route descriptor with no loader.
    pub fn new(path: impl Into<String>, view: ViewFactory) -> Self {
        Self {
            path: path.into(),
            view,
            loader: None,
        }
    }

    /// Attaches a loader.
    pub fn with_loader(mut self, loader: Loader) -> Self {
        self.loader = Some(loader);
        self
    }
}

impl fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("path", &self.path)
            .field("view", &"<factory>")
            .field("loader", &self.loader.as_ref().map(|_| "<loader>"))
            .finish()
    }
}

/// One entry a plugin contributes to a named outlet.
///
/// Either static data (e.g. a navigation-item list) or a lazy view factory.
#[derive(Clone)]
pub enum OutletContribution {
    /// Static data payload, rendered as-is by the host slot.
    Data(Value),
    /// Lazy view payload, resolved on first render of the slot.
    View(ViewFactory),
}

impl OutletContribution {
    /// Static data payload.
    pub fn data(value: Value) -> Self {
        Self::Data(value)
    }

    /// Lazy view payload.
    pub fn view(factory: ViewFactory) -> Self {
        Self::View(factory)
    }

    /// A data payload holding a navigation-item list, the conventional
    /// shape for `sidebar-nav` style outlets.
    pub fn nav_items(items: &[NavigationItem]) -> Self {
        // Serializing a plain string/bool struct cannot fail.
        let value = serde_json::to_value(items).unwrap_or(Value::Array(Vec::new()));
        Self::Data(value)
    }
}

impl fmt::Debug for OutletContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(value) => f.debug_tuple("Data").field(value).finish(),
            Self::View(_) => f.debug_tuple("View").field(&"<factory>").finish(),
        }
    }
}

/// A typical static outlet payload: one navigation entry.
///
/// `exact` controls whether the navigation highlight matches the path as a
/// prefix or an exact string. Display state only; it has no bearing on
/// routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Target route path.
    pub path: String,
    /// Display label.
    pub label: String,
    /// Icon name, interpreted by the host UI.
    pub icon: String,
    /// Exact-match highlighting.
    pub exact: bool,
}

/// The host-facing surface of a plugin's frontend artifact.
///
/// The host never calls any other export. `route_paths` must be callable
/// with zero side effects and without touching any view code — it exists so
/// the build pipeline can pre-compute route shapes without executing the
/// plugin's module graph.
pub trait FrontendContribution: Send + Sync {
    /// Route paths only, for build-time route-table generation.
    fn route_paths(&self) -> Vec<String>;

    /// The authoritative, full route contribution.
    fn routes(&self) -> Vec<RouteDescriptor>;

    /// Outlet contributions keyed by outlet name, each list ordered.
    fn outlets(&self) -> BTreeMap<String, Vec<OutletContribution>>;
}
