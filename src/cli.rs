//! CLI module containing the main entry point logic.
//!
//! Kept out of main.rs so the dispatch can be driven from tests with
//! in-memory streams.

use crate::config::{SCRIPT_DIR_ENV, ScriptDirConfig};
use crate::lister::{StdTerminal, Terminal};
use crate::{Result, executor, inspect, lister, locator, validator};
use clap::Parser as ClapParser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for skyr.
#[derive(ClapParser, Debug)]
#[command(name = "skyr")]
#[command(version = PKG_VERSION)]
#[command(
    about = "A low-fat task runner, Skyr runs scripts from the './script/' directory in a make(1) fashion.",
    long_about = None
)]
#[command(after_help = "Source code: <https://github.com/kytta/skyr>")]
pub struct Cli {
    /// The name of the script to run
    #[arg(value_name = "SCRIPT", default_value = "build")]
    pub script: String,

    /// Arguments passed on to the script
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Script directory. If not provided, skyr looks in '.skyr', 'script' and then 'scripts'
    #[arg(long = "script-dir", alias = "config-dir", value_name = "DIR", env = SCRIPT_DIR_ENV)]
    pub script_dir: Option<PathBuf>,

    /// Show all available scripts and exit
    #[arg(short, long)]
    pub list: bool,

    /// Print a JSON report of all scripts and exit
    #[arg(long, conflicts_with = "list")]
    pub inspect: bool,

    /// Check that the script is executable before running it
    #[arg(long)]
    pub strict: bool,
}

impl Cli {
    /// Dispatch relative to `base`, returning the exit code on failure or
    /// for informational commands. Running a script does not return.
    pub fn run(
        self,
        base: &Path,
        out: &mut dyn Write,
        err: &mut dyn Write,
        terminal: &dyn Terminal,
    ) -> i32 {
        match self.dispatch(base, out, err, terminal) {
            Ok(()) => 0,
            Err(e) => e.exit_code(),
        }
    }

    fn dispatch(
        self,
        base: &Path,
        out: &mut dyn Write,
        err: &mut dyn Write,
        terminal: &dyn Terminal,
    ) -> Result<()> {
        let config = ScriptDirConfig::new(self.script_dir, base.to_path_buf());
        let script_dir = config.locate_script_dir(err)?;

        if self.list {
            return lister::list_and_print(&script_dir, out, err, terminal);
        }

        if self.inspect {
            return inspect::print_inspect(&script_dir, out, err);
        }

        let invocation = locator::script_path(&script_dir, &self.script);
        let script = if self.strict {
            validator::validate_script_reporting(&invocation, err)?
        } else {
            locator::find_script(&self.script, &script_dir, err)?
        };

        executor::execute(&invocation.to_string_lossy(), &script, &self.args, err)
    }
}

/// Main CLI logic that can be called from external wrappers.
pub fn run_cli() -> ! {
    let cli = Cli::parse();
    // Keep conventional names relative if the working directory is gone.
    let base = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    let code = cli.run(&base, &mut out, &mut err, &StdTerminal);
    std::process::exit(code)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::fs;

    struct Piped;

    impl Terminal for Piped {
        fn stdout_is_terminal(&self) -> bool {
            false
        }

        fn stderr_is_terminal(&self) -> bool {
            false
        }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("skyr").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_script_is_build() {
        let cli = parse(&[]);
        assert_eq!(cli.script, "build");
        assert!(cli.args.is_empty());
        assert!(!cli.list);
    }

    #[test]
    fn test_trailing_args_are_forwarded_verbatim() {
        let cli = parse(&["test", "--release", "-v", "unit"]);
        assert_eq!(cli.script, "test");
        assert_eq!(cli.args, vec!["--release", "-v", "unit"]);
    }

    #[test]
    fn test_script_dir_and_alias() {
        let cli = parse(&["--script-dir", "tasks", "lint"]);
        assert_eq!(cli.script_dir, Some(PathBuf::from("tasks")));
        assert_eq!(cli.script, "lint");

        let cli = parse(&["--config-dir", "tasks"]);
        assert_eq!(cli.script_dir, Some(PathBuf::from("tasks")));
    }

    #[test]
    fn test_list_short_flag() {
        assert!(parse(&["-l"]).list);
    }

    #[test]
    fn test_list_and_inspect_conflict() {
        assert!(Cli::try_parse_from(["skyr", "--list", "--inspect"]).is_err());
    }

    #[test]
    fn test_list_dispatch() {
        let temp = tempfile::TempDir::new().unwrap();
        let scripts = temp.path().join("script");
        fs::create_dir(&scripts).unwrap();
        fs::write(scripts.join("hello"), "#!/bin/sh\n").unwrap();
        fs::write(scripts.join("build"), "#!/bin/sh\n").unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = parse(&["--list"]).run(temp.path(), &mut out, &mut err, &Piped);

        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "build\nhello\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_no_script_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = parse(&["hello"]).run(temp.path(), &mut out, &mut err, &Piped);
        assert_eq!(code, 1);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "[ERROR] No script directory found.\n"
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_script_fails_before_exec() {
        let temp = tempfile::TempDir::new().unwrap();
        fs::create_dir(temp.path().join("script")).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = parse(&["missing"]).run(temp.path(), &mut out, &mut err, &Piped);
        assert_eq!(code, 1);
        let stderr = String::from_utf8(err).unwrap();
        assert!(stderr.contains("doesn't exist"));
        assert_eq!(stderr.lines().count(), 1);
    }

    #[test]
    fn test_strict_rejects_non_executable() {
        let temp = tempfile::TempDir::new().unwrap();
        let scripts = temp.path().join("script");
        fs::create_dir(&scripts).unwrap();
        fs::write(scripts.join("build"), "#!/bin/sh\n").unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = parse(&["--strict"]).run(temp.path(), &mut out, &mut err, &Piped);
        assert_eq!(code, 1);
        assert!(String::from_utf8(err).unwrap().contains("is not executable"));
    }

    #[test]
    fn test_explicit_missing_dir_warns_then_errors() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let cli = parse(&["--script-dir", "nowhere", "--list"]);
        let code = cli.run(temp.path(), &mut out, &mut err, &Piped);
        assert_eq!(code, 1);
        let stderr = String::from_utf8(err).unwrap();
        let lines: Vec<&str> = stderr.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[WARNING] Script directory not found:"));
        assert_eq!(lines[1], "[ERROR] No script directory found.");
    }
}
