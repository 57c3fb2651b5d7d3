//! Command-line flags for the `cross-build` cross-compilation tool.
//!
//! The crate declares the options every build command shares and the
//! comma-separated list flags used for environment overrides, target
//! architectures and build tags. Parsing goes through an explicit
//! [`FlagRegistry`] owned by the caller:
//!
//! ```
//! use camino::{Utf8Path, Utf8PathBuf};
//! use cross_flags::{CommonFlags, HostDefaults};
//!
//! let defaults = HostDefaults::from_dirs(
//!     Utf8PathBuf::from("/work/calculator"),
//!     Utf8Path::new("/home/dev/.cache"),
//! );
//! let flags = CommonFlags::parse_from(
//!     "cross-build",
//!     ["cross-build", "-env", "CGO_ENABLED=1", "-tags", "netgo", "linux"],
//!     &defaults,
//! )?;
//! assert_eq!(flags.output, "calculator");
//! assert_eq!(flags.env.as_slice(), ["CGO_ENABLED=1"]);
//! assert_eq!(flags.args, ["linux"]);
//! # Ok::<(), cross_flags::RegistryError>(())
//! ```

mod common;
mod defaults;
mod error;
mod list_flag;
mod registry;

pub use common::{CommonFlags, names};
pub use defaults::{CACHE_DIR_NAME, HostDefaults, ICON_FILE_NAME};
pub use error::{
    CrossFlagsError, DefaultsError, ListFlagError, RegistryError, is_display_request,
};
pub use list_flag::{
    ArchFlag, Architectures, BuildTags, ElementPolicy, EnvAssignment, EnvAssignments, EnvFlag,
    ListFlag, TagsFlag,
};
pub use registry::{FlagRegistry, OptionKind, ParsedFlags, parse_bool_literal};

/// Discovers host defaults, registers the shared options and parses `args`.
///
/// This is the whole flag-setup phase in one call. When the defaults cannot
/// be computed nothing is registered.
///
/// # Errors
///
/// Returns [`CrossFlagsError::Defaults`] when default discovery fails and
/// [`CrossFlagsError::Registry`] when parsing fails.
pub fn parse_common_flags<I, T>(
    program: &'static str,
    args: I,
) -> Result<CommonFlags, CrossFlagsError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString>,
{
    let defaults = HostDefaults::discover()?;
    Ok(CommonFlags::parse_from(program, args, &defaults)?)
}
