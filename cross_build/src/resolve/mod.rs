//! Turns an argument vector into [`CommonFlags`] and renders the result.

use std::ffi::OsString;
use std::io::Write;

use cross_flags::{CommonFlags, FlagRegistry, HostDefaults};

use crate::error::{CrossBuildError, Result};

/// Program name shown in usage and error messages.
pub const PROGRAM: &str = "cross-build";

/// Registers the shared flags on a fresh registry and parses `args`.
///
/// `args` includes the program name in first position.
///
/// # Errors
///
/// Returns [`CrossBuildError::Usage`] when the command line is rejected or
/// help is requested; list-flag failures are rendered with the command's
/// usage. Returns [`CrossBuildError::Registry`] when the option table itself
/// is inconsistent.
pub fn resolve<I, T>(args: I, defaults: &HostDefaults) -> Result<CommonFlags>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut registry = FlagRegistry::new(PROGRAM);
    CommonFlags::register(&mut registry, defaults)?;
    let parsed = registry.parse_from(args)?;
    let flags = CommonFlags::from_parsed(&parsed)
        .map_err(|err| CrossBuildError::Usage(Box::new(parsed.report(&err))))?;
    tracing::debug!(
        output = %flags.output,
        root_dir = %flags.root_dir,
        args = ?flags.args,
        "resolved build flags"
    );
    Ok(flags)
}

/// Writes `flags` to `out` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns [`CrossBuildError::Render`] or [`CrossBuildError::Io`] when the
/// flags cannot be serialised or written.
pub fn write_flags(out: &mut impl Write, flags: &CommonFlags) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, flags)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
