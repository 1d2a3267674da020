//! Check command implementation.

use crate::cli::ScanArgs;
use crate::config::BootstrapConfig;
use crate::error::Result;
use crate::output::Formatter;

/// Print only the scan report.
pub fn execute_check(args: ScanArgs, formatter: &Formatter) -> Result<()> {
    let config = BootstrapConfig::from_file(&args.path)?;
    let (_, report) = super::scan(&config);

    println!("{}", formatter.format_report(&report)?);

    report.ensure_success()?;
    Ok(())
}
