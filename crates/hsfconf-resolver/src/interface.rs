//! Exposed-interface inference for providers

use crate::error::ResolveError;
use crate::merge::Presence;
use hsfconf_domain::metadata::NO_INTERFACE_MARKER;
use std::collections::BTreeSet;

/// Determine the interface a provider exposes
///
/// An explicit declaration (anything other than blank or
/// [`NO_INTERFACE_MARKER`]) is returned verbatim. Otherwise the type must
/// implement exactly one distinct interface directly.
pub fn infer_interface<S: AsRef<str>>(
    declared: Option<&str>,
    type_name: &str,
    interfaces: &[S],
) -> Result<String, ResolveError> {
    if let Some(declared) = declared {
        if declared.is_present() && declared.trim() != NO_INTERFACE_MARKER {
            return Ok(declared.to_string());
        }
    }

    let distinct: BTreeSet<&str> = interfaces.iter().map(AsRef::as_ref).collect();
    let mut iter = distinct.iter();
    match (iter.next(), iter.next()) {
        (Some(only), None) => Ok((*only).to_string()),
        _ => Err(ResolveError::Configuration {
            type_name: type_name.to_string(),
            reason: format!(
                "must declare service_interface or implement exactly one interface (implements {})",
                distinct.len()
            ),
        }),
    }
}
