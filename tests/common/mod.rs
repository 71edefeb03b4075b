//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path of the compiled skyr binary
pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_skyr"))
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to create a scripts directory (e.g. `script`) inside `root`
pub fn create_script_dir(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Helper to write an executable script
pub fn create_script(dir: &Path, name: &str, content: &str) -> PathBuf {
    write_with_mode(dir, name, content, 0o755)
}

/// Helper to write a script without any execute bit
pub fn create_plain_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    write_with_mode(dir, name, content, 0o644)
}

fn write_with_mode(dir: &Path, name: &str, content: &str, mode: u32) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    path
}

/// Helper to create a Command running in `cwd` with a clean skyr environment
pub fn test_command(binary: &PathBuf, cwd: &Path) -> Command {
    let mut cmd = Command::new(binary);
    cmd.current_dir(cwd);
    cmd.env_remove("SKYR_SCRIPT_DIR");
    cmd.env_remove("SKYR_LOG");
    cmd
}
