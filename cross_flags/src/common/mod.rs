//! Options shared by every build command.

use std::ffi::OsString;

use serde::Serialize;

use crate::defaults::HostDefaults;
use crate::error::RegistryError;
use crate::list_flag::{ArchFlag, EnvFlag, TagsFlag};
use crate::registry::{FlagRegistry, ParsedFlags};

use self::names::{
    APP_ID, ARCH, CACHE, DEBUG, DIR, ENV, ICON, IMAGE, LDFLAGS, NO_CACHE, NO_STRIP_DEBUG, OUTPUT,
    PULL, SILENT, TAGS,
};

/// Option names as they appear on the command line.
pub mod names {
    /// `-app-id`
    pub const APP_ID: &str = "app-id";
    /// `-cache`
    pub const CACHE: &str = "cache";
    /// `-no-cache`
    pub const NO_CACHE: &str = "no-cache";
    /// `-env`
    pub const ENV: &str = "env";
    /// `-icon`
    pub const ICON: &str = "icon";
    /// `-image`
    pub const IMAGE: &str = "image";
    /// `-ldflags`
    pub const LDFLAGS: &str = "ldflags";
    /// `-tags`
    pub const TAGS: &str = "tags";
    /// `-arch`
    pub const ARCH: &str = "arch";
    /// `-no-strip-debug`
    pub const NO_STRIP_DEBUG: &str = "no-strip-debug";
    /// `-output`
    pub const OUTPUT: &str = "output";
    /// `-dir`
    pub const DIR: &str = "dir";
    /// `-silent`
    pub const SILENT: &str = "silent";
    /// `-debug`
    pub const DEBUG: &str = "debug";
    /// `-pull`
    pub const PULL: &str = "pull";
}

/// Flags shared between all build commands.
///
/// Built once per invocation by [`CommonFlags::from_parsed`] and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each switch is an independent command-line option"
)]
pub struct CommonFlags {
    /// Application ID used for distribution.
    pub app_id: String,
    /// Directory used to share and cache sources and dependencies.
    pub cache_dir: String,
    /// Custom docker image to use for the build.
    pub docker_image: String,
    /// Additional environment variables, each `KEY=VALUE` or `KEY=`.
    pub env: EnvFlag,
    /// Application icon used for distribution.
    pub icon: String,
    /// Flags passed to the external linker.
    pub ldflags: String,
    /// Additional build tags.
    pub tags: TagsFlag,
    /// Target architectures, in build order.
    pub target_arch: ArchFlag,
    /// Skip the go build cache.
    pub no_cache: bool,
    /// Keep debug information in binaries.
    pub no_strip_debug: bool,
    /// Named output file.
    pub output: String,
    /// Project root directory.
    pub root_dir: String,
    /// Silent mode.
    pub silent: bool,
    /// Debug mode.
    pub debug: bool,
    /// Attempt to pull a newer version of the docker image.
    pub pull: bool,
    /// Arguments following the last option.
    pub args: Vec<String>,
}

impl CommonFlags {
    /// Registers every shared option, using `defaults` for the options whose
    /// default depends on the host.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateOption`] when `registry` already
    /// defines one of the shared names.
    pub fn register(
        registry: &mut FlagRegistry,
        defaults: &HostDefaults,
    ) -> Result<(), RegistryError> {
        registry.register_string(
            APP_ID,
            defaults.output.as_str(),
            "Application ID used for distribution",
        )?;
        registry.register_string(
            CACHE,
            defaults.cache_dir.as_str(),
            "Directory used to share/cache sources and dependencies",
        )?;
        registry.register_bool(NO_CACHE, false, "Do not use the go build cache")?;
        registry.register_list(
            ENV,
            "List of additional env variables specified as KEY=VALUE and separated by comma",
        )?;
        registry.register_string(
            ICON,
            defaults.icon.as_str(),
            "Application icon used for distribution",
        )?;
        registry.register_string(IMAGE, "", "Custom docker image to use for build")?;
        registry.register_string(
            LDFLAGS,
            "",
            "Additional flags to pass to the external linker",
        )?;
        registry.register_list(TAGS, "List of additional build tags separated by comma")?;
        registry.register_list(
            ARCH,
            "List of target architecture to build separated by comma",
        )?;
        registry.register_bool(
            NO_STRIP_DEBUG,
            false,
            "Do not strip debug information from binaries",
        )?;
        registry.register_string(OUTPUT, defaults.output.as_str(), "Named output file")?;
        registry.register_string(DIR, defaults.root_dir.as_str(), "App root directory")?;
        registry.register_bool(SILENT, false, "Silent mode")?;
        registry.register_bool(DEBUG, false, "Debug mode")?;
        registry.register_bool(
            PULL,
            false,
            "Attempt to pull a newer version of the docker image",
        )?;
        Ok(())
    }

    /// Reads the shared options out of `parsed`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidValue`] when a list option rejects
    /// one of its arguments, or [`RegistryError::Unregistered`] when
    /// `parsed` did not come from a registry prepared by
    /// [`CommonFlags::register`].
    pub fn from_parsed(parsed: &ParsedFlags) -> Result<Self, RegistryError> {
        let mut flags = Self {
            app_id: parsed.string(APP_ID)?,
            cache_dir: parsed.string(CACHE)?,
            docker_image: parsed.string(IMAGE)?,
            env: EnvFlag::new(),
            icon: parsed.string(ICON)?,
            ldflags: parsed.string(LDFLAGS)?,
            tags: TagsFlag::new(),
            target_arch: ArchFlag::new(),
            no_cache: parsed.bool(NO_CACHE)?,
            no_strip_debug: parsed.bool(NO_STRIP_DEBUG)?,
            output: parsed.string(OUTPUT)?,
            root_dir: parsed.string(DIR)?,
            silent: parsed.bool(SILENT)?,
            debug: parsed.bool(DEBUG)?,
            pull: parsed.bool(PULL)?,
            args: parsed.positional(),
        };
        parsed.apply_list(ENV, &mut flags.env)?;
        parsed.apply_list(TAGS, &mut flags.tags)?;
        parsed.apply_list(ARCH, &mut flags.target_arch)?;
        Ok(flags)
    }

    /// Registers the shared options on a fresh registry and parses `args`.
    ///
    /// # Errors
    ///
    /// Propagates registration, `clap` and list validation failures.
    pub fn parse_from<I, T>(
        program: &'static str,
        args: I,
        defaults: &HostDefaults,
    ) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut registry = FlagRegistry::new(program);
        Self::register(&mut registry, defaults)?;
        let parsed = registry.parse_from(args)?;
        Self::from_parsed(&parsed)
    }
}
