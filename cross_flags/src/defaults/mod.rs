//! Host-dependent default values for the shared options.
//!
//! The working directory supplies the project root, the output name and the
//! icon location; the user cache directory supplies the shared cache.

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::DefaultsError;

/// Directory created under the user cache directory.
pub const CACHE_DIR_NAME: &str = "cross-build";
/// File name of the default application icon, relative to the project root.
pub const ICON_FILE_NAME: &str = "Icon.png";

/// Defaults computed from the host before any option is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDefaults {
    /// Last component of the working directory; empty at the filesystem root.
    pub output: String,
    /// Project root directory.
    pub root_dir: Utf8PathBuf,
    /// Directory used to share and cache sources and dependencies.
    pub cache_dir: Utf8PathBuf,
    /// Application icon used for distribution.
    pub icon: Utf8PathBuf,
}

impl HostDefaults {
    /// Discovers defaults from the current working directory and the user
    /// cache directory.
    ///
    /// # Errors
    ///
    /// Returns a [`DefaultsError`] when the working directory cannot be read,
    /// the platform has no user cache directory, or either path is not
    /// UTF-8.
    pub fn discover() -> Result<Self, DefaultsError> {
        let work_dir = std::env::current_dir()
            .map_err(DefaultsError::WorkingDirectory)
            .and_then(|dir| Utf8PathBuf::from_path_buf(dir).map_err(DefaultsError::NonUtf8Path))?;
        let cache_root = dirs::cache_dir()
            .ok_or(DefaultsError::CacheDirectoryUnavailable)
            .and_then(|dir| Utf8PathBuf::from_path_buf(dir).map_err(DefaultsError::NonUtf8Path))?;
        let defaults = Self::from_dirs(work_dir, &cache_root);
        tracing::debug!(
            root_dir = %defaults.root_dir,
            cache_dir = %defaults.cache_dir,
            output = %defaults.output,
            "discovered host defaults"
        );
        Ok(defaults)
    }

    /// Derives defaults from an explicit working directory and cache root.
    #[must_use]
    pub fn from_dirs(work_dir: Utf8PathBuf, cache_root: &Utf8Path) -> Self {
        let output = work_dir.file_name().unwrap_or_default().to_owned();
        let icon = work_dir.join(ICON_FILE_NAME);
        Self {
            output,
            cache_dir: cache_root.join(CACHE_DIR_NAME),
            icon,
            root_dir: work_dir,
        }
    }
}
