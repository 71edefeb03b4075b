//! Listing the scripts available in a scripts directory.

use crate::diagnostics;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

/// Script name to resolved path. Says nothing about whether a script runs.
pub type ScriptMap = HashMap<String, PathBuf>;

/// Header shown above the list on an interactive terminal.
pub const LIST_HEADER: &str = "Available scripts";

/// Whether the standard streams are attached to a terminal.
pub trait Terminal {
    fn stdout_is_terminal(&self) -> bool;
    fn stderr_is_terminal(&self) -> bool;
}

/// The real process streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn stdout_is_terminal(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn stderr_is_terminal(&self) -> bool {
        io::stderr().is_terminal()
    }
}

/// Map every regular file directly inside `directory` by its file name.
///
/// No recursion and no validation: subdirectories are skipped, but files
/// without an execute bit or a shebang are included. Symlinks count as
/// whatever they point to.
///
/// # Errors
///
/// [`Error::ReadDirectory`] if the directory can't be read.
pub fn script_map(directory: &Path) -> Result<ScriptMap> {
    let entries = fs::read_dir(directory).map_err(|source| Error::ReadDirectory {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut scripts = ScriptMap::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::ReadDirectory {
            path: directory.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if !path.is_file() {
            tracing::trace!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        let resolved = fs::canonicalize(&path).unwrap_or(path);
        scripts.insert(entry.file_name().to_string_lossy().into_owned(), resolved);
    }

    tracing::debug!(count = scripts.len(), dir = %directory.display(), "collected scripts");
    Ok(scripts)
}

/// Sorted script names in `directory`.
///
/// # Errors
///
/// See [`script_map`].
pub fn list_scripts(directory: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = script_map(directory)?.into_keys().collect();
    names.sort();
    Ok(names)
}

/// Write `names` for a human on a terminal, or bare for a pipe.
///
/// The header goes to `err` and only when both streams are terminals, so
/// it never ends up in captured output. Names are indented on a terminal.
///
/// # Errors
///
/// Propagates write failures on `out`.
pub fn print_scripts(
    names: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
    terminal: &dyn Terminal,
) -> io::Result<()> {
    let interactive = terminal.stdout_is_terminal();

    if interactive && terminal.stderr_is_terminal() {
        writeln!(err, "{LIST_HEADER}:")?;
        err.flush()?;
    }

    let indent = if interactive { "    " } else { "" };
    for name in names {
        writeln!(out, "{indent}{name}")?;
    }
    out.flush()
}

/// Collect, sort and print the scripts in `directory`.
///
/// # Errors
///
/// Reports and returns [`Error::ReadDirectory`] when listing fails, or
/// [`Error::Output`] when writing does.
pub fn list_and_print(
    directory: &Path,
    out: &mut dyn Write,
    err: &mut dyn Write,
    terminal: &dyn Terminal,
) -> Result<()> {
    let names = list_scripts(directory).map_err(|failure| diagnostics::report(err, failure))?;
    print_scripts(&names, out, err, terminal)
        .map_err(|source| diagnostics::report(err, Error::Output(source)))
}
