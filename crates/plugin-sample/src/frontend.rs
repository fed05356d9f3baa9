//! Sample plugin frontend contribution.
//!
//! `route_paths` returns its paths as a direct literal so the build-time
//! extractor can recover them from source without loading any view code.

use std::collections::BTreeMap;
use std::sync::Arc;

use plughub_contrib::component::View;
use plughub_contrib::descriptor::{
    FrontendContribution, NavigationItem, OutletContribution, RequestContext, RouteDescriptor,
};

use crate::views::{DashboardWidget, FeatureView};

/// The sample plugin's frontend surface.
#[derive(Debug, Default)]
pub struct SampleFrontend;

impl SampleFrontend {
    /// Creates the contribution.
    pub fn new() -> Self {
        Self
    }
}

impl FrontendContribution for SampleFrontend {
    fn route_paths(&self) -> Vec<String> {
        vec!["/org/:org_slug/plugin-feature".to_string()]
    }

    fn routes(&self) -> Vec<RouteDescriptor> {
        vec![
            RouteDescriptor::new(
                "/org/:org_slug/plugin-feature",
                Arc::new(|| {
                    Box::pin(async { Ok(Arc::new(FeatureView) as Arc<dyn View>) })
                }),
            )
            .with_loader(Arc::new(|ctx: RequestContext| {
                Box::pin(async move {
                    Ok(serde_json::json!({
                        "org_slug": ctx.param("org_slug"),
                    }))
                })
            })),
        ]
    }

    fn outlets(&self) -> BTreeMap<String, Vec<OutletContribution>> {
        let nav_item = NavigationItem {
            path: "/org/:org_slug/plugin-feature".to_string(),
            label: "Plugin Feature".to_string(),
            icon: "puzzle".to_string(),
            exact: false,
        };

        BTreeMap::from([
            (
                "sidebar-nav".to_string(),
                vec![OutletContribution::nav_items(&[nav_item])],
            ),
            (
                "dashboard-content".to_string(),
                vec![OutletContribution::view(Arc::new(|| {
                    Box::pin(async { Ok(Arc::new(DashboardWidget) as Arc<dyn View>) })
                }))],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_project_routes() {
        let frontend = SampleFrontend::new();

        let declared = frontend.route_paths();
        let actual: Vec<String> = frontend.routes().into_iter().map(|r| r.path).collect();

        // The paths-only query must never drift from the full contribution.
        assert_eq!(declared, actual);
    }

    #[test]
    fn test_outlets_cover_both_extension_points() {
        let outlets = SampleFrontend::new().outlets();

        assert_eq!(outlets.len(), 2);
        assert!(outlets.contains_key("sidebar-nav"));
        assert!(outlets.contains_key("dashboard-content"));

        let OutletContribution::Data(nav) = &outlets["sidebar-nav"][0] else {
            panic!("sidebar-nav must carry a static data payload");
        };
        assert_eq!(nav[0]["label"], "Plugin Feature");
        assert_eq!(nav[0]["exact"], false);
    }
}
