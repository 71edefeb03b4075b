//! Failure taxonomy for script resolution and execution.

use std::path::PathBuf;

/// Everything that can stop a script from being resolved or run.
///
/// The `Display` text of each variant is exactly what gets written after the
/// `[ERROR]` prefix on the error stream.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Script directory doesn't exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Script directory is not a directory: {}", .0.display())]
    DirectoryNotADirectory(PathBuf),

    #[error("No script directory found.")]
    NoScriptDirectoryFound,

    #[error("Script doesn't exist: {}", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("Script is not a file: {}", .0.display())]
    ScriptNotAFile(PathBuf),

    #[error("Script is not executable: {}", .0.display())]
    ScriptNotExecutable(PathBuf),

    #[error(
        "You are not allowed to execute {}. Please make sure that you've set the correct rights via chmod.",
        .0.display()
    )]
    ExecPermissionDenied(PathBuf),

    #[error(
        "{} has a wrong executable format. Did you forget to add a shebang?",
        .0.display()
    )]
    ExecFormatError(PathBuf),

    #[error("Could not execute {}: {reason}", .path.display())]
    ExecOther { path: PathBuf, reason: String },

    #[error("Could not read script directory {}: {source}", .path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("Could not serialise inspection output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this failure. Every failure is terminal.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias for skyr operations
pub type Result<T> = std::result::Result<T, Error>;
