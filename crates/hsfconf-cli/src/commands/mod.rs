//! Command implementations.

mod check;
mod resolve;

pub use check::execute_check;
pub use resolve::execute_resolve;

use crate::config::BootstrapConfig;
use hsfconf_registry::InMemoryRegistry;
use hsfconf_resolver::{ScanReport, Scanner};
use std::sync::Arc;

/// Scan every component in a bootstrap file into a fresh registry.
pub fn scan(config: &BootstrapConfig) -> (InMemoryRegistry, ScanReport) {
    let manifest = config.manifest();
    let mut registry = InMemoryRegistry::new();
    let mut scanner = Scanner::with_value_resolver(
        config.defaults.clone(),
        Arc::new(config.value_resolver()),
    );
    let report = scanner.scan(&manifest, &mut registry);
    (registry, report)
}
