//! Facts about a single script path.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A script path together with what the filesystem said about it.
///
/// Computed fresh on every lookup. The facts describe the moment of the
/// lookup only; the file may change before it is executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedScript {
    pub path: PathBuf,
    pub exists: bool,
    pub is_file: bool,
    pub executable: bool,
}

impl ResolvedScript {
    /// Stat `path` (following symlinks) and record the results.
    ///
    /// The path is canonicalized when it exists, otherwise kept as given.
    #[must_use]
    pub fn inspect(path: &Path) -> Self {
        let Ok(metadata) = fs::metadata(path) else {
            return Self {
                path: path.to_path_buf(),
                exists: false,
                is_file: false,
                executable: false,
            };
        };

        let is_file = metadata.is_file();
        Self {
            path: fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
            exists: true,
            is_file,
            executable: is_file && is_executable(path),
        }
    }
}

/// Whether the current user may execute `path`.
#[cfg(unix)]
#[must_use]
pub fn is_executable(path: &Path) -> bool {
    use nix::unistd::{AccessFlags, access};
    access(path, AccessFlags::X_OK).is_ok()
}

/// Whether the current user may execute `path`.
#[cfg(not(unix))]
#[must_use]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}
