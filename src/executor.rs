//! Handing the process over to a script.

use crate::Error;
use crate::diagnostics;
use crate::script::ResolvedScript;
use std::io::Write;
#[cfg(unix)]
use std::path::Path;

/// Replace the current process with `script`.
///
/// The script sees `invocation_name` as `argv[0]`, `args` as the rest of its
/// arguments and inherits the environment unchanged. There is no return on
/// success: the script's exit status becomes the exit status seen by the
/// shell. On failure one `[ERROR]` line is written to `err` and the process
/// exits with status 1.
pub fn execute(
    invocation_name: &str,
    script: &ResolvedScript,
    args: &[String],
    err: &mut dyn Write,
) -> ! {
    tracing::debug!(
        script = %script.path.display(),
        argv0 = invocation_name,
        ?args,
        "executing script"
    );

    let failure = replace_process(invocation_name, script, args);
    let code = failure.exit_code();
    diagnostics::report(err, failure);
    std::process::exit(code)
}

/// `execv(2)` the script. Only ever returns the reason it failed.
///
/// `execv` rather than `std::os::unix::process::CommandExt::exec`: the latter
/// goes through `execvp`, which retries files without a shebang under
/// `/bin/sh` instead of reporting `ENOEXEC`.
#[cfg(unix)]
pub fn replace_process(invocation_name: &str, script: &ResolvedScript, args: &[String]) -> Error {
    use nix::unistd::execv;
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let path = &script.path;
    let Ok(program) = CString::new(path.as_os_str().as_bytes()) else {
        return nul_byte(path);
    };

    let collected: Result<Vec<CString>, _> = std::iter::once(invocation_name)
        .chain(args.iter().map(String::as_str))
        .map(CString::new)
        .collect();
    let Ok(argv) = collected else {
        return nul_byte(path);
    };

    match execv(&program, &argv) {
        Ok(never) => match never {},
        Err(errno) => classify(path, errno),
    }
}

/// Without image replacement, run the script to completion and exit with its
/// status. `argv[0]` can't be overridden here.
#[cfg(not(unix))]
pub fn replace_process(invocation_name: &str, script: &ResolvedScript, args: &[String]) -> Error {
    use std::process::{Command, Stdio};

    tracing::trace!(argv0 = invocation_name, "spawning script, no exec available");
    match Command::new(&script.path)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
    {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Error::ExecPermissionDenied(script.path.clone())
        }
        Err(e) => Error::ExecOther {
            path: script.path.clone(),
            reason: e.to_string(),
        },
    }
}

/// Map an exec failure onto the user-facing taxonomy.
#[cfg(unix)]
#[must_use]
pub fn classify(path: &Path, errno: nix::errno::Errno) -> Error {
    use nix::errno::Errno;

    match errno {
        Errno::EACCES => Error::ExecPermissionDenied(path.to_path_buf()),
        Errno::ENOEXEC => Error::ExecFormatError(path.to_path_buf()),
        other => Error::ExecOther {
            path: path.to_path_buf(),
            reason: other.desc().to_string(),
        },
    }
}

#[cfg(unix)]
fn nul_byte(path: &Path) -> Error {
    Error::ExecOther {
        path: path.to_path_buf(),
        reason: "argument contains an interior NUL byte".to_string(),
    }
}
