//! Build-time extraction against the real sample plugin source, plus
//! manifest↔runtime drift detection.

use std::path::PathBuf;

use plughub_contrib::descriptor::FrontendContribution;
use plughub_extract::{ExtractionOutcome, RouteExtractor, RouteManifest, Strategy};
use plugin_sample::frontend::SampleFrontend;

fn sample_frontend_source() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("crates/plugin-sample/src/frontend.rs")
}

#[test]
fn test_extractor_recovers_sample_plugin_routes_from_source() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("routes.json");

    let outcome = RouteExtractor::new(&output)
        .with_source(sample_frontend_source())
        .run()
        .unwrap();

    assert_eq!(
        outcome,
        ExtractionOutcome::Extracted {
            count: 1,
            strategy: Strategy::Source,
        }
    );

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        manifest,
        serde_json::json!({
            "routes": [ { "path": "/org/:org_slug/plugin-feature" } ]
        })
    );
}

#[test]
fn test_manifest_does_not_drift_from_runtime_contribution() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("routes.json");

    RouteExtractor::new(&output)
        .with_source(sample_frontend_source())
        .run()
        .unwrap();

    let manifest = RouteManifest::load(&output).unwrap();
    let frontend = SampleFrontend::new();

    let declared: Vec<String> = manifest.paths().iter().map(|p| p.to_string()).collect();
    let runtime: Vec<String> = frontend.routes().into_iter().map(|r| r.path).collect();

    // Every statically extracted path must exist in the runtime
    // contribution; divergence means the extractor drifted.
    for path in &declared {
        assert!(
            runtime.contains(path),
            "manifest path '{path}' missing from runtime routes"
        );
    }

    // And the paths-only query agrees as well.
    assert_eq!(declared, frontend.route_paths());
}

#[test]
fn test_missing_source_and_bundle_is_a_clean_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("routes.json");

    let outcome = RouteExtractor::new(&output)
        .with_source(dir.path().join("absent.rs"))
        .with_bundle(dir.path().join("absent.so"))
        .run()
        .unwrap();

    assert_eq!(outcome, ExtractionOutcome::NoRoutes);
    assert!(!output.exists());
}
