//! Scratch project directories backed by [`figment::Jail`].
//!
//! A jail moves the process into a fresh temporary directory and restores the
//! working directory and every environment variable it touched once the
//! closure returns. Jails are serialised by a lock owned by `figment`.
//!
//! # Examples
//!
//! ```
//! use cross_flags_test_helpers::with_project;
//!
//! let name = with_project(|project| Ok(project.name().to_owned()))?;
//! assert!(!name.is_empty());
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use figment::Jail;

/// Variable consulted for the user cache directory on Linux and the BSDs.
pub const CACHE_HOME_VAR: &str = "XDG_CACHE_HOME";

/// A project directory that exists for the duration of one closure.
pub struct Project<'jail> {
    jail: &'jail mut Jail,
    root: Utf8PathBuf,
}

impl Project<'_> {
    /// Canonical path of the directory the project started in.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Last component of [`Project::root`].
    #[must_use]
    pub fn name(&self) -> &str {
        self.root.file_name().unwrap_or_default()
    }

    /// Creates `relative` below the root and makes it the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or entered.
    #[expect(
        clippy::result_large_err,
        reason = "figment's error type is what jail closures return"
    )]
    pub fn enter(&mut self, relative: &str) -> figment::error::Result<Utf8PathBuf> {
        let dir = self.root.join(relative);
        std::fs::create_dir_all(&dir).map_err(to_figment)?;
        std::env::set_current_dir(&dir).map_err(to_figment)?;
        Ok(dir)
    }

    /// Points the user cache directory at `relative` below the root.
    ///
    /// The variable is restored when the project closure returns.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    #[expect(
        clippy::result_large_err,
        reason = "figment's error type is what jail closures return"
    )]
    pub fn set_cache_home(&mut self, relative: &str) -> figment::error::Result<Utf8PathBuf> {
        let dir = self.root.join(relative);
        std::fs::create_dir_all(&dir).map_err(to_figment)?;
        self.jail.set_env(CACHE_HOME_VAR, dir.as_str());
        Ok(dir)
    }
}

/// Runs `f` inside a fresh [`Project`] and returns its output.
///
/// The working directory and environment are restored even when `f` fails.
///
/// # Errors
///
/// Returns an error when the jail cannot be created, its directory is not
/// UTF-8, or `f` returns an error.
pub fn with_project<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut Project<'_>) -> figment::error::Result<T>,
{
    let mut output = None;
    Jail::try_with(|jail| {
        let root = canonical_root(jail.directory())?;
        let mut project = Project { jail, root };
        output = Some(f(&mut project)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("project closure did not return a value"))
}

#[expect(clippy::result_large_err, reason = "propagated straight into the jail closure")]
fn canonical_root(dir: &std::path::Path) -> figment::error::Result<Utf8PathBuf> {
    let canonical = std::fs::canonicalize(dir).map_err(to_figment)?;
    Utf8PathBuf::from_path_buf(canonical).map_err(|path| {
        figment::Error::from(format!("jail directory is not UTF-8: {}", path.display()))
    })
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a `map_err` adapter over owned I/O errors"
)]
fn to_figment(err: std::io::Error) -> figment::Error {
    figment::Error::from(err.to_string())
}
