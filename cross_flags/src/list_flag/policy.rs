//! Per-element behaviour for the list flag variants.

use crate::error::ListFlagError;

/// Capability trait describing how a [`ListFlag`](super::ListFlag) treats
/// its elements.
///
/// Both hooks have pass-through defaults, so a policy only overrides the
/// behaviour it needs.
pub trait ElementPolicy {
    /// Short label used in diagnostics and log events.
    const KIND: &'static str;

    /// Converts one raw comma-separated piece into the stored element.
    #[must_use]
    fn normalise(piece: &str) -> String {
        piece.to_owned()
    }

    /// Checks the complete candidate list before it replaces the old one.
    ///
    /// # Errors
    ///
    /// Returns a [`ListFlagError`] describing the first rejected element.
    fn validate(_entries: &[String]) -> Result<(), ListFlagError> {
        Ok(())
    }
}

/// Environment overrides. Pieces are kept verbatim, including surrounding
/// whitespace, and each must be `KEY=VALUE` or `KEY=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvAssignments;

impl ElementPolicy for EnvAssignments {
    const KIND: &'static str = "env";

    fn validate(entries: &[String]) -> Result<(), ListFlagError> {
        entries
            .iter()
            .try_for_each(|entry| EnvAssignment::parse(entry).map(|_| ()))
    }
}

/// Target architectures. Pieces are whitespace-trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Architectures;

impl ElementPolicy for Architectures {
    const KIND: &'static str = "arch";

    fn normalise(piece: &str) -> String {
        piece.trim().to_owned()
    }
}

/// Build tags. Pieces are whitespace-trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildTags;

impl ElementPolicy for BuildTags {
    const KIND: &'static str = "tags";

    fn normalise(piece: &str) -> String {
        piece.trim().to_owned()
    }
}

/// Borrowed view of one `KEY=VALUE` env entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvAssignment<'a> {
    key: &'a str,
    value: &'a str,
}

impl<'a> EnvAssignment<'a> {
    /// Splits `entry` on `=`, requiring exactly two parts.
    ///
    /// The value may be empty (`KEY=`); a second `=` makes the entry invalid.
    ///
    /// # Errors
    ///
    /// Returns [`ListFlagError::MalformedEnvEntry`] when `entry` contains no
    /// `=` or more than one.
    pub fn parse(entry: &'a str) -> Result<Self, ListFlagError> {
        let mut parts = entry.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => Ok(Self { key, value }),
            _ => Err(ListFlagError::MalformedEnvEntry {
                entry: entry.to_owned(),
            }),
        }
    }

    /// Variable name, left of the `=`.
    #[must_use]
    pub const fn key(&self) -> &'a str {
        self.key
    }

    /// Assigned value, right of the `=`; may be empty.
    #[must_use]
    pub const fn value(&self) -> &'a str {
        self.value
    }
}
