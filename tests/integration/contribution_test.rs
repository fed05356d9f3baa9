//! Frontend contribution composition: route merge, outlet aggregation,
//! and navigation against the sample plugin.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use plughub_contrib::component::{View, ViewContext};
use plughub_contrib::descriptor::{
    FrontendContribution, OutletContribution, RouteDescriptor, ViewFactory,
};
use plughub_contrib::host::ContributionHost;
use plughub_contrib::navigator::NavigationOutcome;
use plughub_contrib::outlets::RenderedFragment;
use plughub_core::error::ErrorKind;
use plugin_sample::frontend::SampleFrontend;

struct Tagged(&'static str);

impl View for Tagged {
    fn render(&self, _ctx: &ViewContext) -> String {
        self.0.to_string()
    }
}

fn tagged_factory(tag: &'static str, calls: Arc<AtomicUsize>) -> ViewFactory {
    Arc::new(move || {
        let calls = calls.clone();
        Box::pin(async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Tagged(tag)) as Arc<dyn View>)
        })
    })
}

/// Minimal second plugin used to provoke collisions and outlet ordering.
struct RivalFrontend {
    path: &'static str,
    widget_calls: Arc<AtomicUsize>,
}

impl FrontendContribution for RivalFrontend {
    fn route_paths(&self) -> Vec<String> {
        vec![self.path.to_string()]
    }

    fn routes(&self) -> Vec<RouteDescriptor> {
        vec![RouteDescriptor::new(
            self.path,
            tagged_factory("rival-route", Arc::new(AtomicUsize::new(0))),
        )]
    }

    fn outlets(&self) -> BTreeMap<String, Vec<OutletContribution>> {
        BTreeMap::from([(
            "dashboard-content".to_string(),
            vec![OutletContribution::view(tagged_factory(
                "rival-widget",
                self.widget_calls.clone(),
            ))],
        )])
    }
}

#[tokio::test]
async fn test_sample_plugin_route_navigates_with_loader_data() {
    let mut host = ContributionHost::new();
    host.mount_plugin("sample-plugin", &SampleFrontend::new())
        .unwrap();

    let navigator = host.navigator();
    let rendered = match navigator.navigate("/org/acme/plugin-feature").await {
        NavigationOutcome::Rendered(rendered) => rendered,
        other => panic!("expected rendered outcome, got {other:?}"),
    };

    assert_eq!(rendered.contributor, "sample-plugin");
    assert_eq!(rendered.pattern, "/org/:org_slug/plugin-feature");
    assert!(rendered.markup.contains("Organization: acme"));
    assert_eq!(rendered.data.unwrap()["org_slug"], "acme");
}

#[tokio::test]
async fn test_route_collision_across_plugins_fails_composition() {
    let mut host = ContributionHost::new();
    host.mount_plugin("sample-plugin", &SampleFrontend::new())
        .unwrap();

    let rival = RivalFrontend {
        path: "/org/:org_slug/plugin-feature",
        widget_calls: Arc::new(AtomicUsize::new(0)),
    };
    let err = host.mount_plugin("rival-plugin", &rival).unwrap_err();

    assert_eq!(err.kind, ErrorKind::Collision);
    assert!(err.message.contains("sample-plugin"));
    assert!(err.message.contains("rival-plugin"));
}

#[tokio::test]
async fn test_host_and_plugin_collide_through_the_same_check() {
    let mut host = ContributionHost::new();
    host.mount_host_routes(vec![RouteDescriptor::new(
        "/org/:org_slug/plugin-feature",
        tagged_factory("host-route", Arc::new(AtomicUsize::new(0))),
    )])
    .unwrap();

    let err = host
        .mount_plugin("sample-plugin", &SampleFrontend::new())
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Collision);
    assert!(err.message.contains("host"));
}

#[tokio::test]
async fn test_dashboard_outlet_renders_both_plugins_in_order_once() {
    let rival_calls = Arc::new(AtomicUsize::new(0));

    let mut host = ContributionHost::new();
    host.mount_plugin("sample-plugin", &SampleFrontend::new())
        .unwrap();
    host.mount_plugin(
        "rival-plugin",
        &RivalFrontend {
            path: "/rival",
            widget_calls: rival_calls.clone(),
        },
    )
    .unwrap();

    let ctx = ViewContext::default();

    for _ in 0..2 {
        let fragments = host.outlets().render("dashboard-content", &ctx).await;
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].contributor(), "sample-plugin");
        assert_eq!(fragments[1].contributor(), "rival-plugin");

        let RenderedFragment::Markup { markup, .. } = &fragments[0] else {
            panic!("sample widget should render markup");
        };
        assert!(markup.contains("Plugin Dashboard Widget"));
    }

    // Two renders, one factory invocation.
    assert_eq!(rival_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_sidebar_nav_payload_passes_through() {
    let mut host = ContributionHost::new();
    host.mount_plugin("sample-plugin", &SampleFrontend::new())
        .unwrap();

    let fragments = host
        .outlets()
        .render("sidebar-nav", &ViewContext::default())
        .await;

    assert_eq!(fragments.len(), 1);
    let RenderedFragment::Data { value, .. } = &fragments[0] else {
        panic!("sidebar-nav should carry static data");
    };
    assert_eq!(value[0]["path"], "/org/:org_slug/plugin-feature");
    assert_eq!(value[0]["exact"], false);
}
