//! Typed access to the values produced by [`FlagRegistry::parse_from`].
//!
//! [`FlagRegistry::parse_from`]: super::FlagRegistry::parse_from

use clap::{ArgMatches, Command, error::ErrorKind};

use super::{OptionKind, OptionSpec, POSITIONAL};
use crate::error::RegistryError;
use crate::list_flag::{ElementPolicy, ListFlag};

/// Parsed command line together with the definitions that produced it.
#[derive(Debug)]
pub struct ParsedFlags {
    command: Command,
    matches: ArgMatches,
    options: Vec<OptionSpec>,
}

impl ParsedFlags {
    pub(super) const fn new(
        command: Command,
        matches: ArgMatches,
        options: Vec<OptionSpec>,
    ) -> Self {
        Self {
            command,
            matches,
            options,
        }
    }

    /// Returns the value of a string option: the last occurrence on the
    /// command line, or the registered default.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unregistered`] when `name` is not a string
    /// option.
    pub fn string(&self, name: &str) -> Result<String, RegistryError> {
        self.expect_kind(name, OptionKind::String)?;
        self.matches
            .try_get_one::<String>(name)
            .ok()
            .flatten()
            .cloned()
            .ok_or_else(|| unregistered(name, OptionKind::String))
    }

    /// Returns the value of a boolean option.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unregistered`] when `name` is not a boolean
    /// option.
    pub fn bool(&self, name: &str) -> Result<bool, RegistryError> {
        self.expect_kind(name, OptionKind::Bool)?;
        self.matches
            .try_get_one::<bool>(name)
            .ok()
            .flatten()
            .copied()
            .ok_or_else(|| unregistered(name, OptionKind::Bool))
    }

    /// Replays every occurrence of list option `name`, in command-line
    /// order, through [`ListFlag::set`].
    ///
    /// A list that never appeared leaves `destination` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unregistered`] when `name` is not a list
    /// option, or [`RegistryError::InvalidValue`] for the first raw argument
    /// the list flag rejects.
    pub fn apply_list<P: ElementPolicy>(
        &self,
        name: &str,
        destination: &mut ListFlag<P>,
    ) -> Result<(), RegistryError> {
        self.expect_kind(name, OptionKind::List)?;
        let raws = self
            .matches
            .try_get_many::<String>(name)
            .map_err(|_| unregistered(name, OptionKind::List))?;
        for raw in raws.into_iter().flatten() {
            destination
                .set(raw)
                .map_err(|source| RegistryError::InvalidValue {
                    name: name.to_owned(),
                    raw: raw.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Arguments left after the last option, in order.
    #[must_use]
    pub fn positional(&self) -> Vec<String> {
        self.matches
            .try_get_many::<String>(POSITIONAL)
            .ok()
            .flatten()
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }

    /// Turns a [`RegistryError`] raised after parsing into a `clap` error
    /// carrying this command's usage, ready for [`clap::Error::exit`].
    #[must_use]
    pub fn report(&self, err: &RegistryError) -> clap::Error {
        let kind = match err {
            RegistryError::InvalidValue { .. } => ErrorKind::ValueValidation,
            _ => ErrorKind::InvalidValue,
        };
        self.command.clone().error(kind, err)
    }

    fn expect_kind(&self, name: &str, expected: OptionKind) -> Result<(), RegistryError> {
        let registered = self
            .options
            .iter()
            .any(|spec| spec.name == name && spec.kind == expected);
        if registered {
            Ok(())
        } else {
            Err(unregistered(name, expected))
        }
    }
}

fn unregistered(name: &str, expected: OptionKind) -> RegistryError {
    RegistryError::Unregistered {
        name: name.to_owned(),
        expected,
    }
}
