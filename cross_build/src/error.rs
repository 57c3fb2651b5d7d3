//! Error types for the `cross-build` entry point.
//!
//! Usage errors carry a fully rendered `clap` report so `main` can print it
//! and exit with the parser's status code. Everything else is handed to
//! `color-eyre`.

use cross_flags::{DefaultsError, RegistryError};
use thiserror::Error;

/// Errors raised while resolving the shared build flags.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CrossBuildError {
    /// Host defaults could not be discovered.
    #[error("failed to discover host defaults: {0}")]
    Defaults(#[from] DefaultsError),
    /// The option table could not be built.
    #[error("failed to register build flags: {0}")]
    Registry(RegistryError),
    /// The command line was rejected, or help was requested.
    #[error("{0}")]
    Usage(Box<clap::Error>),
    /// The resolved flags could not be serialised.
    #[error("failed to render build flags: {0}")]
    Render(#[from] serde_json::Error),
    /// Writing to standard output failed.
    #[error("failed to write build flags: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RegistryError> for CrossBuildError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::Cli(inner) => Self::Usage(inner),
            other => Self::Registry(other),
        }
    }
}

/// Convenience alias for results returned by the entry point.
pub type Result<T, E = CrossBuildError> = std::result::Result<T, E>;
