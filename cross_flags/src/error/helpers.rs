//! Helpers for classifying errors surfaced by `clap`.

use clap::{Error as ClapError, error::ErrorKind};

/// Returns `true` when a [`clap::Error`] corresponds to `-help` or
/// `--help`.
///
/// Entry points use this to route help output through
/// [`clap::Error::exit`], which prints to stdout and exits with status zero,
/// instead of treating it as a parse failure.
#[must_use]
pub fn is_display_request(err: &ClapError) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}
