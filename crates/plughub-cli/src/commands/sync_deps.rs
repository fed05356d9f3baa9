//! Copy the shared SDK crates from a sibling main-repository checkout
//! into a local directory, so an out-of-tree plugin can use them as path
//! dependencies without publishing.
//!
//! The checkout location comes from the `PLUGHUB_MAIN_REPO` environment
//! variable, then the configured `plugins.main_repo`, then the
//! conventional sibling path.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use plughub_core::error::AppError;

/// The shared crates an out-of-tree plugin builds against.
const PACKAGES_TO_COPY: &[&str] = &[
    "plughub-core",
    "plughub-registry",
    "plughub-contrib",
    "plughub-sdk",
];

/// Arguments for the sync-deps command
#[derive(Debug, Args)]
pub struct SyncDepsArgs {
    /// Destination directory for the copied crates
    #[arg(short, long, default_value = "core-deps")]
    pub dest: String,
}

/// Execute the sync-deps command
pub fn execute(args: &SyncDepsArgs, env: &str) -> Result<(), AppError> {
    let main_repo = resolve_main_repo(env)?;

    let main_repo_path = Path::new(&main_repo);
    if !main_repo_path.exists() {
        return Err(AppError::configuration(format!(
            "main repository not found at '{main_repo}'; \
             set PLUGHUB_MAIN_REPO to point to the main repo checkout"
        )));
    }

    let dest_root = PathBuf::from(&args.dest);
    std::fs::create_dir_all(&dest_root)?;

    println!("Copying packages from main repository at {main_repo}...");

    for package in PACKAGES_TO_COPY {
        let source = main_repo_path.join("crates").join(package);
        if !source.join("Cargo.toml").exists() {
            return Err(AppError::configuration(format!(
                "package '{package}' not found in main repository at '{}'",
                source.display()
            )));
        }

        let target = dest_root.join(package);
        if target.exists() {
            std::fs::remove_dir_all(&target)?;
        }

        copy_recursive(&source, &target)?;
        info!(package, target = %target.display(), "Package copied");
        println!("  Copied {package}");
    }

    println!("Core dependencies synced to {}", dest_root.display());
    Ok(())
}

/// Environment variable wins, then config, then the conventional sibling
/// path baked into the config default.
fn resolve_main_repo(env: &str) -> Result<String, AppError> {
    if let Ok(path) = std::env::var("PLUGHUB_MAIN_REPO") {
        return Ok(path);
    }

    let config = super::load_config(env)?;
    Ok(config.plugins.main_repo)
}

fn copy_recursive(source: &Path, target: &Path) -> Result<(), AppError> {
    std::fs::create_dir_all(target)?;

    for entry in std::fs::read_dir(source)? {
        let entry = entry?;
        let entry_target = target.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_recursive(&entry.path(), &entry_target)?;
        } else {
            std::fs::copy(entry.path(), &entry_target)?;
        }
    }

    Ok(())
}
