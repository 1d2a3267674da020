//! CLI command definitions and argument parsing.

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hsfconf - Resolve declarative HSF service metadata into endpoint definitions.
#[derive(Debug, Parser)]
#[command(name = "hsfconf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log resolution details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve all components and print every registry entry
    Resolve(ScanArgs),

    /// Resolve all components and print only the summary and failures
    Check(ScanArgs),
}

/// Arguments shared by scanning commands.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// Bootstrap file (TOML)
    #[arg(env = "HSFCONF_BOOTSTRAP")]
    pub path: PathBuf,
}
