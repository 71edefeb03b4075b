//! Turn a script name into a path inside the scripts directory.

use crate::diagnostics;
use crate::script::ResolvedScript;
use crate::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Find the script called `name` inside `directory`.
///
/// Only existence and file type are checked here; whether the script can
/// actually be executed is left to the executor (or to
/// [`crate::validator::validate_script`] on the strict path).
///
/// `name` is joined through [`script_path`], so a name such as `../bin/tool`
/// resolves outside the scripts directory.
///
/// # Errors
///
/// Writes one `[ERROR]` line to `err` and returns the failure when the
/// directory is missing or not a directory, or when the script is missing or
/// not a regular file.
pub fn find_script(name: &str, directory: &Path, err: &mut dyn Write) -> Result<ResolvedScript> {
    let Ok(directory) = fs::canonicalize(directory) else {
        let missing = Error::DirectoryNotFound(directory.to_path_buf());
        return Err(diagnostics::report(err, missing));
    };
    if !directory.is_dir() {
        return Err(diagnostics::report(err, Error::DirectoryNotADirectory(directory)));
    }

    let candidate = script_path(&directory, name);
    tracing::debug!(script = %candidate.display(), "looking up script");

    let script = ResolvedScript::inspect(&candidate);
    if !script.exists {
        return Err(diagnostics::report(err, Error::ScriptNotFound(script.path)));
    }
    if !script.is_file {
        return Err(diagnostics::report(err, Error::ScriptNotAFile(script.path)));
    }

    Ok(script)
}

/// Join `name` onto `directory`.
///
/// Trailing and repeated separators are dropped, so `build/` names the file
/// `build`. Parent components are kept.
#[must_use]
pub fn script_path(directory: &Path, name: &str) -> PathBuf {
    directory.join(Path::new(name).components().collect::<PathBuf>())
}
