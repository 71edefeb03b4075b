//! # skyr
//!
//! A low-fat task runner: resolves a script by name inside a scripts
//! directory and replaces the current process with it.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod executor;
pub mod inspect;
pub mod lister;
pub mod locator;
pub mod resolver;
pub mod script;
pub mod validator;

pub use error::{Error, Result};
