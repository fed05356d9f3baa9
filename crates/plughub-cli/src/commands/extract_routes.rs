//! Build-step command: extract a plugin's route paths into `routes.json`.
//!
//! Exit-code policy: degraded outcomes — no routes found, bundle missing,
//! source unparseable — are warnings with a zero exit, because a plugin
//! contributing no routes is valid and a build must never hard-fail on a
//! contribution that could not be statically analyzed. Only internal
//! errors (for example, an unwritable output path) exit non-zero.

use clap::Args;

use plughub_core::error::AppError;
use plughub_extract::{ExtractionOutcome, RouteExtractor};

/// Arguments for the extract-routes command
#[derive(Debug, Args)]
pub struct ExtractRoutesArgs {
    /// Plugin frontend source file to scan
    #[arg(short, long)]
    pub source: Option<String>,

    /// Built plugin artifact to fall back to
    #[arg(short, long)]
    pub bundle: Option<String>,

    /// Output manifest path
    #[arg(short, long, default_value = "routes.json")]
    pub out: String,
}

/// Execute the extract-routes command
pub fn execute(args: &ExtractRoutesArgs) -> Result<(), AppError> {
    let mut extractor = RouteExtractor::new(&args.out);

    if let Some(source) = &args.source {
        extractor = extractor.with_source(source);
    }
    if let Some(bundle) = &args.bundle {
        extractor = extractor.with_bundle(bundle);
    }

    match extractor.run()? {
        ExtractionOutcome::Extracted { count, .. } => {
            println!("Extracted {count} route path(s) to {}", args.out);
        }
        ExtractionOutcome::NoRoutes => {
            println!("No routes extracted; skipping {}", args.out);
        }
    }

    Ok(())
}
