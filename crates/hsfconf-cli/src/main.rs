//! hsfconf CLI - Resolve HSF service metadata from a bootstrap file.

use anyhow::Context;
use clap::Parser;
use hsfconf_cli::{commands, Cli, Command, Formatter, OutputFormat};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format.map(Into::into).unwrap_or(OutputFormat::Table);
    let formatter = Formatter::new(format, !cli.no_color);

    match cli.command {
        Command::Resolve(args) => {
            let path = args.path.display().to_string();
            commands::execute_resolve(args, &formatter)
                .with_context(|| format!("resolving {}", path))?;
        }
        Command::Check(args) => {
            let path = args.path.display().to_string();
            commands::execute_check(args, &formatter)
                .with_context(|| format!("checking {}", path))?;
        }
    }

    Ok(())
}
