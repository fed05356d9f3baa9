//! # plughub-contrib
//!
//! Frontend side of the plugin extension protocol. Provides:
//!
//! - Contribution descriptors: routes, outlets, navigation items
//! - The [`FrontendContribution`] trait a plugin's frontend artifact exposes
//! - Lazy, memoized view factories (a view is resolved at most once per
//!   session, on first use)
//! - The contribution host: collision-checked route table, ordered outlet
//!   slots, and a navigator with loader execution and stale-result discard

pub mod component;
pub mod descriptor;
pub mod host;
pub mod lazy;
pub mod navigator;
pub mod outlets;
pub mod routes;

pub use component::{View, ViewContext};
pub use descriptor::{
    FrontendContribution, Loader, NavigationItem, OutletContribution, RequestContext,
    RouteDescriptor, ViewFactory,
};
pub use host::ContributionHost;
pub use lazy::LazyView;
pub use navigator::{NavigationOutcome, Navigator, RenderedRoute};
pub use outlets::{OutletSlots, RenderedFragment};
pub use routes::{RouteMatch, RouteTable};
