//! Views contributed by the sample plugin.
//!
//! These render to plain markup text; the host's UI library is out of
//! scope at this boundary.

use plughub_contrib::component::{View, ViewContext};

/// The view behind `/org/:org_slug/plugin-feature`.
#[derive(Debug, Default)]
pub struct FeatureView;

impl View for FeatureView {
    fn render(&self, ctx: &ViewContext) -> String {
        let org_slug = ctx
            .data
            .as_ref()
            .and_then(|d| d.get("org_slug"))
            .and_then(|v| v.as_str())
            .or_else(|| ctx.param("org_slug"))
            .unwrap_or("unknown");

        format!(
            "<page title=\"Plugin Feature\" subtitle=\"This is a test route from the plugin\">\
             Hello from plugin! Organization: {org_slug}. \
             This route was loaded dynamically from the plugin bundle.\
             </page>"
        )
    }
}

/// Dashboard widget injected into the `dashboard-content` outlet.
#[derive(Debug, Default)]
pub struct DashboardWidget;

impl View for DashboardWidget {
    fn render(&self, _ctx: &ViewContext) -> String {
        "<widget title=\"Plugin Dashboard Widget\">\
         This widget is provided by the sample plugin. It demonstrates how \
         plugins can inject content into the main application dashboard.\
         </widget>"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_view_prefers_loader_data() {
        let ctx = ViewContext {
            params: [("org_slug".to_string(), "param-org".to_string())]
                .into_iter()
                .collect(),
            data: Some(serde_json::json!({"org_slug": "loader-org"})),
        };

        assert!(FeatureView.render(&ctx).contains("Organization: loader-org"));
    }

    #[test]
    fn test_feature_view_falls_back_to_params() {
        let ctx = ViewContext {
            params: [("org_slug".to_string(), "acme".to_string())]
                .into_iter()
                .collect(),
            data: None,
        };

        assert!(FeatureView.render(&ctx).contains("Organization: acme"));
    }
}
