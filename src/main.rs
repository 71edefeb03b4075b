//! # skyr
//!
//! A low-fat task runner. Put executable scripts in `./script/` (or `.skyr/`,
//! or `scripts/`) and run them by name; skyr replaces itself with the script.
//!
//! ## Usage
//!
//! - Run `./script/build`: `skyr`
//! - Run a script with arguments: `skyr test --release`
//! - List available scripts: `skyr --list`
//! - Use another directory: `skyr --script-dir tools lint`
//!
//! Set `SKYR_LOG=debug` to see how the script was resolved.

use tracing_subscriber::EnvFilter;

/// Entry point for the CLI tool.
fn main() {
    let filter =
        EnvFilter::try_from_env(skyr::config::LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    skyr::cli::run_cli();
}
