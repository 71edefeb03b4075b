//! Machine-readable report of the scripts directory.

use crate::diagnostics;
use crate::lister::script_map;
use crate::script::ResolvedScript;
use crate::validator::validate_script;
use crate::{Error, Result};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub script_dir: PathBuf,
    pub scripts: Vec<ScriptReport>,
}

/// One script with the facts found about it.
#[derive(Debug, Serialize)]
pub struct ScriptReport {
    pub name: String,
    #[serde(flatten)]
    pub script: ResolvedScript,
    /// Why strict validation would reject this script, if it would.
    pub problem: Option<String>,
}

/// Build the report for every script in `directory`, sorted by name.
///
/// # Errors
///
/// [`Error::ReadDirectory`] if the directory can't be listed.
pub fn inspect(directory: &Path) -> Result<InspectOutput> {
    let mut scripts: Vec<ScriptReport> = script_map(directory)?
        .into_iter()
        .map(|(name, path)| {
            let problem = validate_script(&path).err().map(|e| e.to_string());
            ScriptReport {
                name,
                script: ResolvedScript::inspect(&path),
                problem,
            }
        })
        .collect();
    scripts.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(InspectOutput {
        script_dir: directory.to_path_buf(),
        scripts,
    })
}

/// Print the report for `directory` as pretty JSON.
///
/// # Errors
///
/// Reports and returns listing, serialisation or write failures.
pub fn print_inspect(directory: &Path, out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
    let output = inspect(directory).map_err(|failure| diagnostics::report(err, failure))?;
    let json = serde_json::to_string_pretty(&output)
        .map_err(|failure| diagnostics::report(err, Error::from(failure)))?;
    writeln!(out, "{json}").map_err(|source| diagnostics::report(err, Error::Output(source)))
}
