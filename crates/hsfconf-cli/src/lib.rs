//! hsfconf CLI library.
//!
//! Loads a bootstrap file, runs a resolution scan, and formats the
//! resulting registry for inspection.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::BootstrapConfig;
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
