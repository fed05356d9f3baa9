//! Cross-crate integration tests for the plugin extension protocol.

mod contribution_test;
mod extract_test;
mod registry_test;
