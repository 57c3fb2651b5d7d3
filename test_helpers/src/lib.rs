//! Test helpers shared across crates in the cross-build workspace.
//!
//! The crate provides scratch project directories for tests that depend on
//! the process working directory or the user cache location.

pub mod project;

pub use project::{CACHE_HOME_VAR, Project, with_project};
