//! Where to look for scripts.

use crate::diagnostics;
use crate::resolver::resolve_directory;
use crate::{Error, Result};
use std::io::Write;
use std::path::PathBuf;

/// Conventional scripts directories, probed in this order.
pub const CONVENTIONAL_DIRS: [&str; 3] = [".skyr", "script", "scripts"];

/// Environment variable that may name the scripts directory.
pub const SCRIPT_DIR_ENV: &str = "SKYR_SCRIPT_DIR";

/// Environment variable holding the `tracing` filter for debug logging.
pub const LOG_ENV: &str = "SKYR_LOG";

/// Scripts directory settings for one invocation.
#[derive(Debug, Clone)]
pub struct ScriptDirConfig {
    /// Directory given via `--script-dir` or [`SCRIPT_DIR_ENV`].
    pub explicit: Option<PathBuf>,
    /// Directory the conventional names are relative to.
    pub base: PathBuf,
}

impl ScriptDirConfig {
    #[must_use]
    pub fn new(explicit: Option<PathBuf>, base: PathBuf) -> Self {
        Self { explicit, base }
    }

    /// Ordered candidate list.
    ///
    /// The explicit directory leads the chain only if it is actually a
    /// directory. Otherwise a warning is written and the conventional names
    /// take over.
    pub fn candidates(&self, err: &mut dyn Write) -> Vec<PathBuf> {
        let mut candidates = Vec::with_capacity(CONVENTIONAL_DIRS.len() + 1);

        if let Some(given) = &self.explicit {
            let explicit = self.base.join(given);
            if explicit.is_dir() {
                candidates.push(explicit);
            } else {
                diagnostics::warn(
                    err,
                    format_args!("Script directory not found: {}", given.display()),
                );
            }
        }

        candidates.extend(CONVENTIONAL_DIRS.iter().map(|name| self.base.join(name)));
        candidates
    }

    /// Resolve the scripts directory, reporting when there is none.
    ///
    /// # Errors
    ///
    /// [`Error::NoScriptDirectoryFound`] when no candidate is a directory.
    pub fn locate_script_dir(&self, err: &mut dyn Write) -> Result<PathBuf> {
        resolve_directory(self.candidates(err))
            .ok_or_else(|| diagnostics::report(err, Error::NoScriptDirectoryFound))
    }
}
