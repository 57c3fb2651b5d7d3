//! Option registry built on [`clap::Command`].
//!
//! A [`FlagRegistry`] is an owned builder: callers create one, register every
//! option exactly once, then hand it the argument vector. Nothing is stored in
//! process-wide state, so independent registries can parse in parallel.
//!
//! Options are accepted in the single-dash long form the build tool has
//! always used (`-tags netgo`, `-debug`, `-output=app`) as well as the
//! double-dash form. Parsing stops at the first positional argument.

mod args;
mod parsed;

use std::ffi::OsString;
use std::fmt;

use clap::{Arg, ArgAction, Command};

use crate::error::RegistryError;

pub use parsed::ParsedFlags;

/// Identifier of the trailing positional arguments.
const POSITIONAL: &str = "positional";

/// Value shape of a registered option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Free-form string, replaced verbatim by the raw argument.
    String,
    /// Boolean switch; bare `-name` means `true`.
    Bool,
    /// Comma-separated list applied through a [`ListFlag`](crate::ListFlag).
    List,
}

impl OptionKind {
    /// Returns `true` when the option consumes the following argument.
    const fn takes_value(self) -> bool {
        matches!(self, Self::String | Self::List)
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "a string option",
            Self::Bool => "a boolean option",
            Self::List => "a list option",
        })
    }
}

/// Name and kind of one registered option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OptionSpec {
    name: &'static str,
    kind: OptionKind,
}

/// Builder collecting option definitions before parsing.
///
/// ```
/// use cross_flags::{FlagRegistry, TagsFlag};
///
/// let mut registry = FlagRegistry::new("cross-build");
/// registry.register_string("output", "app", "Named output file")?;
/// registry.register_list("tags", "List of additional build tags separated by comma")?;
///
/// let parsed = registry.parse_from(["cross-build", "-tags", "netgo,osusergo"])?;
/// let mut tags = TagsFlag::default();
/// parsed.apply_list("tags", &mut tags)?;
/// assert_eq!(parsed.string("output")?, "app");
/// assert_eq!(tags.as_slice(), ["netgo", "osusergo"]);
/// # Ok::<(), cross_flags::RegistryError>(())
/// ```
#[derive(Debug)]
pub struct FlagRegistry {
    command: Command,
    options: Vec<OptionSpec>,
}

impl FlagRegistry {
    /// Creates an empty registry for the program called `program`.
    #[must_use]
    pub fn new(program: &'static str) -> Self {
        let command = Command::new(program)
            .args_override_self(true)
            .disable_version_flag(true)
            .arg(
                Arg::new(POSITIONAL)
                    .value_name("ARGS")
                    .action(ArgAction::Append)
                    .num_args(1..)
                    .trailing_var_arg(true)
                    .help("Arguments passed through to the command"),
            );
        Self {
            command,
            options: Vec::new(),
        }
    }

    /// Registers a string option with a default value.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateOption`] when `name` is taken.
    pub fn register_string(
        &mut self,
        name: &'static str,
        default: impl Into<String>,
        help: &'static str,
    ) -> Result<(), RegistryError> {
        let default_value = default.into();
        let arg = Arg::new(name)
            .long(name)
            .help(help)
            .value_name("VALUE")
            .action(ArgAction::Set)
            .allow_hyphen_values(true)
            .hide_default_value(default_value.is_empty())
            .default_value(default_value);
        self.push(name, OptionKind::String, arg)
    }

    /// Registers a boolean switch.
    ///
    /// `-name` alone sets `true`; `-name=false` and the other boolean
    /// literals accepted by [`parse_bool_literal`] set an explicit value.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateOption`] when `name` is taken.
    pub fn register_bool(
        &mut self,
        name: &'static str,
        default: bool,
        help: &'static str,
    ) -> Result<(), RegistryError> {
        let arg = Arg::new(name)
            .long(name)
            .help(help)
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .default_value(if default { "true" } else { "false" })
            .hide_default_value(!default)
            .value_parser(parse_bool_literal);
        self.push(name, OptionKind::Bool, arg)
    }

    /// Registers a comma-separated list option.
    ///
    /// Every occurrence is kept in order; [`ParsedFlags::apply_list`] replays
    /// them through [`ListFlag::set`](crate::ListFlag::set).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateOption`] when `name` is taken.
    pub fn register_list(
        &mut self,
        name: &'static str,
        help: &'static str,
    ) -> Result<(), RegistryError> {
        let arg = Arg::new(name)
            .long(name)
            .help(help)
            .value_name("LIST")
            .action(ArgAction::Append)
            .allow_hyphen_values(true);
        self.push(name, OptionKind::List, arg)
    }

    /// Returns the kind `name` was registered with, if any.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<OptionKind> {
        self.options
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.kind)
    }

    /// Parses `args`, whose first element is the program name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Cli`] for unknown options, missing values,
    /// malformed boolean literals and help requests. List values are not
    /// validated here; see [`ParsedFlags::apply_list`].
    pub fn parse_from<I, T>(self, args: I) -> Result<ParsedFlags, RegistryError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let Self {
            mut command,
            options,
        } = self;
        let normalised = args::normalise(args, &options);
        let matches = command.try_get_matches_from_mut(normalised)?;
        tracing::debug!(options = options.len(), "parsed command line");
        Ok(ParsedFlags::new(command, matches, options))
    }

    fn push(
        &mut self,
        name: &'static str,
        kind: OptionKind,
        arg: Arg,
    ) -> Result<(), RegistryError> {
        if name == POSITIONAL || self.kind_of(name).is_some() {
            return Err(RegistryError::DuplicateOption(name.to_owned()));
        }
        tracing::trace!(name, ?kind, "registered option");
        self.options.push(OptionSpec { name, kind });
        self.command = std::mem::take(&mut self.command).arg(arg);
        Ok(())
    }
}

/// Parses the boolean literals accepted on the command line.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`,
/// `FALSE`, `false`, `False`.
///
/// # Errors
///
/// Returns a message naming the rejected literal.
pub fn parse_bool_literal(raw: &str) -> Result<bool, String> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(format!("invalid boolean value {other:?}")),
    }
}
