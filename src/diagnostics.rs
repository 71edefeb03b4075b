//! `[WARNING]` and `[ERROR]` lines for the user.
//!
//! These always go to the error stream handle passed in, never to stdout, so
//! that script output and `--list` output stay clean for piping.

use std::fmt::Display;
use std::io::Write;

/// Write a `[WARNING]` line.
pub fn warn(err: &mut dyn Write, message: impl Display) {
    tracing::debug!(text = %message, "warning reported");
    // Nothing sensible left to do if stderr itself is gone.
    let _ = writeln!(err, "[WARNING] {message}");
    let _ = err.flush();
}

/// Write an `[ERROR]` line.
pub fn error(err: &mut dyn Write, message: impl Display) {
    tracing::debug!(text = %message, "error reported");
    let _ = writeln!(err, "[ERROR] {message}");
    let _ = err.flush();
}

/// Report `failure` once and hand it back, for use at the point of detection.
pub fn report(err: &mut dyn Write, failure: crate::Error) -> crate::Error {
    error(err, &failure);
    failure
}
