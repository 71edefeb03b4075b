//! Strict script validation: exists, is a file, is executable.

use crate::diagnostics;
use crate::script::ResolvedScript;
use crate::{Error, Result};
use std::io::Write;
use std::path::Path;

/// Check that `path` is an executable regular file and return it resolved.
///
/// Stricter than [`crate::locator::find_script`]: executability is checked
/// up front instead of being left to the exec call. Validating an already
/// validated path yields the same path.
///
/// # Errors
///
/// [`Error::ScriptNotFound`], [`Error::ScriptNotAFile`] or
/// [`Error::ScriptNotExecutable`]. Nothing is written to any stream.
pub fn validate_script(path: &Path) -> Result<ResolvedScript> {
    let script = ResolvedScript::inspect(path);
    if !script.exists {
        return Err(Error::ScriptNotFound(script.path));
    }
    if !script.is_file {
        return Err(Error::ScriptNotAFile(script.path));
    }
    if !script.executable {
        return Err(Error::ScriptNotExecutable(script.path));
    }
    Ok(script)
}

/// [`validate_script`], reporting the failure on `err`.
///
/// # Errors
///
/// Same as [`validate_script`], after writing one `[ERROR]` line.
pub fn validate_script_reporting(path: &Path, err: &mut dyn Write) -> Result<ResolvedScript> {
    validate_script(path).map_err(|failure| diagnostics::report(err, failure))
}
