//! Comma-separated multi-value flags.
//!
//! A [`ListFlag`] turns one raw argument such as `CGO_ENABLED=1,GOFLAGS=`
//! into an ordered list of strings. The parsing is shared; what differs per
//! flag is the [`ElementPolicy`], which decides how each piece is normalised
//! and which shape the finished list must have.
//!
//! Assignment is single-shot in the sense the build tool has always used: a
//! flag whose list already holds more than one element refuses a further
//! [`ListFlag::set`]. A list holding zero or one element can be replaced.
//!
//! ```
//! use cross_flags::{EnvFlag, TagsFlag};
//!
//! let mut tags = TagsFlag::default();
//! tags.set(" release , netgo ")?;
//! assert_eq!(tags.as_slice(), ["release", "netgo"]);
//!
//! let mut env = EnvFlag::default();
//! assert!(env.set("CGO_ENABLED=1,GOOS").is_err());
//! assert!(env.is_empty());
//! # Ok::<(), cross_flags::ListFlagError>(())
//! ```

mod policy;

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer};

use crate::error::ListFlagError;

pub use policy::{Architectures, BuildTags, ElementPolicy, EnvAssignment, EnvAssignments};

/// List of `KEY=VALUE` environment overrides.
pub type EnvFlag = ListFlag<EnvAssignments>;
/// List of target architectures, in build order.
pub type ArchFlag = ListFlag<Architectures>;
/// List of additional build tags.
pub type TagsFlag = ListFlag<BuildTags>;

const SEPARATOR: char = ',';

/// Ordered list of strings parsed from one comma-separated argument.
pub struct ListFlag<P> {
    values: Vec<String>,
    policy: PhantomData<fn() -> P>,
}

impl<P: ElementPolicy> ListFlag<P> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: Vec::new(),
            policy: PhantomData,
        }
    }

    /// Parses `raw` and replaces the current list with the result.
    ///
    /// `raw` is split on `,` without any escaping, so `""` yields one empty
    /// element and a trailing comma yields a trailing empty element. The
    /// new list is validated in full before it is stored; on failure the
    /// previous value is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ListFlagError::AlreadySet`] when the list already holds more
    /// than one element, or the policy's validation error.
    pub fn set(&mut self, raw: &str) -> Result<(), ListFlagError> {
        if self.values.len() > 1 {
            return Err(ListFlagError::AlreadySet);
        }
        let pieces: Vec<String> = raw.split(SEPARATOR).map(P::normalise).collect();
        P::validate(&pieces)?;
        tracing::debug!(kind = P::KIND, entries = ?pieces, "list flag set");
        self.values = pieces;
        Ok(())
    }

    /// Borrows the parsed elements in declaration order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    /// Iterates over the parsed elements in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }

    /// Number of elements currently held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no argument has been applied yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the flag and returns the owned elements.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.values
    }
}

impl ListFlag<EnvAssignments> {
    /// Iterates over the entries as key/value pairs.
    ///
    /// ```
    /// use cross_flags::EnvFlag;
    ///
    /// let mut env = EnvFlag::default();
    /// env.set("GOARM=7,CGO_CFLAGS=")?;
    /// let pairs: Vec<_> = env.assignments().map(|a| (a.key(), a.value())).collect();
    /// assert_eq!(pairs, [("GOARM", "7"), ("CGO_CFLAGS", "")]);
    /// # Ok::<(), cross_flags::ListFlagError>(())
    /// ```
    pub fn assignments(&self) -> impl Iterator<Item = EnvAssignment<'_>> {
        self.values
            .iter()
            .filter_map(|entry| EnvAssignment::parse(entry).ok())
    }
}

impl<P: ElementPolicy> Default for ListFlag<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for ListFlag<P> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            policy: PhantomData,
        }
    }
}

impl<P> PartialEq for ListFlag<P> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<P> Eq for ListFlag<P> {}

impl<P: ElementPolicy> fmt::Debug for ListFlag<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListFlag")
            .field("kind", &P::KIND)
            .field("values", &self.values)
            .finish()
    }
}

/// Renders the list as `[a b c]`; used in diagnostics only.
impl<P> fmt::Display for ListFlag<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(value)?;
        }
        f.write_str("]")
    }
}

impl<P> Serialize for ListFlag<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

impl<'a, P: ElementPolicy> IntoIterator for &'a ListFlag<P> {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
