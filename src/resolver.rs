//! Scripts directory discovery.

use std::fs;
use std::path::{Path, PathBuf};

/// Return the first candidate that is an existing directory, canonicalized.
///
/// Empty candidates are skipped. A candidate that doesn't exist is simply
/// passed over; `None` means nothing qualified.
pub fn resolve_directory<I, P>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.as_os_str().is_empty() {
            continue;
        }

        tracing::trace!(candidate = %candidate.display(), "probing script directory");
        if candidate.is_dir()
            && let Ok(resolved) = fs::canonicalize(candidate)
        {
            tracing::debug!(dir = %resolved.display(), "resolved script directory");
            return Some(resolved);
        }
    }

    None
}
