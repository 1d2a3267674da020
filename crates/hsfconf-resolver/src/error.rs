//! Error types for resolution

use thiserror::Error;

/// Errors that can occur while resolving endpoint metadata
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Metadata cannot be turned into a complete definition
    #[error("Configuration error for {type_name}: {reason}")]
    Configuration {
        /// Offending type identifier
        type_name: String,
        /// What must be fixed
        reason: String,
    },

    /// The registry rejected a definition
    #[error("Registry error: {0}")]
    Registry(String),

    /// One or more components failed during a scan
    #[error("Scan failed: {0} component(s) could not be resolved")]
    ScanFailed(usize),
}

impl ResolveError {
    /// Offending type for configuration errors
    pub fn type_name(&self) -> Option<&str> {
        match self {
            ResolveError::Configuration { type_name, .. } => Some(type_name),
            _ => None,
        }
    }
}
