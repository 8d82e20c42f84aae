//! JaCoCo summary CLI library.
//!
//! Argument parsing, configuration and logging for the `jacoco-summary`
//! binary. Extraction and rendering live in the `jacoco-summary` crate.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{Cli, ColorArg, FormatArg, ScopeArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, StatusReporter};
