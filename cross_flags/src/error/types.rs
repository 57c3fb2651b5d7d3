//! Error enums for list flags, the flag registry and host defaults.

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::OptionKind;

/// Failures raised by [`ListFlag::set`](crate::ListFlag::set).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ListFlagError {
    /// The destination already holds more than one element.
    #[error("flag already set")]
    AlreadySet,
    /// An env entry does not split into exactly one key and one value.
    #[error("env var must be defined as KEY=VALUE or KEY=")]
    MalformedEnvEntry {
        /// The offending entry, exactly as it appeared in the argument.
        entry: String,
    },
}

/// Failures raised while registering options or reading parsed values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The same option name was registered twice.
    #[error("flag redefined: {0}")]
    DuplicateOption(String),

    /// A value was requested for a name that is not registered with the
    /// expected kind.
    #[error("flag -{name} is not registered as {expected}")]
    Unregistered {
        /// Name that was looked up.
        name: String,
        /// Kind the caller expected the option to have.
        expected: OptionKind,
    },

    /// A list flag rejected one of its raw arguments.
    #[error("invalid value {raw:?} for flag -{name}: {source}")]
    InvalidValue {
        /// Name of the list option.
        name: String,
        /// Raw argument passed on the command line.
        raw: String,
        /// Reason the list flag refused the argument.
        #[source]
        source: ListFlagError,
    },

    /// `clap` rejected the argument vector, or help was requested.
    #[error("failed to parse command-line arguments: {0}")]
    Cli(#[from] Box<clap::Error>),
}

/// Failures raised while computing host-dependent default values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DefaultsError {
    /// The current working directory could not be read.
    #[error("cannot get the path for current directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    /// A host path could not be represented as UTF-8.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    /// The platform does not define a user cache directory.
    #[error("cannot locate the user cache directory")]
    CacheDirectoryUnavailable,
}

/// Top-level error for the flag setup phase.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CrossFlagsError {
    /// Host defaults could not be computed, so no option was registered.
    #[error(transparent)]
    Defaults(#[from] DefaultsError),

    /// Registration or parsing failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl From<clap::Error> for RegistryError {
    fn from(err: clap::Error) -> Self {
        Self::Cli(Box::new(err))
    }
}
