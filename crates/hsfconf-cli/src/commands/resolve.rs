//! Resolve command implementation.

use crate::cli::ScanArgs;
use crate::config::BootstrapConfig;
use crate::error::Result;
use crate::output::Formatter;

/// Print every resolved registry entry followed by the scan report.
pub fn execute_resolve(args: ScanArgs, formatter: &Formatter) -> Result<()> {
    let config = BootstrapConfig::from_file(&args.path)?;
    let (registry, report) = super::scan(&config);

    println!("{}", formatter.format_entries(registry.entries())?);
    println!("{}", formatter.format_report(&report)?);

    report.ensure_success()?;
    Ok(())
}
