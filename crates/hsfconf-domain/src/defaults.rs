//! Process-wide defaults
//!
//! Supplied once at startup and injected into resolvers at construction.

use serde::{Deserialize, Serialize};

/// Built-in client call timeout (milliseconds)
pub const DEFAULT_CLIENT_TIMEOUT_MS: u32 = 3000;

/// Built-in client idle timeout (seconds)
pub const DEFAULT_CLIENT_IDLE_TIMEOUT_SECS: u32 = 10;

/// Global defaults that provider metadata may override
///
/// # Examples
///
/// ```
/// use hsfconf_domain::GlobalDefaults;
///
/// let defaults = GlobalDefaults::default();
/// assert!(defaults.service_version.is_none());
///
/// let defaults = GlobalDefaults::new()
///     .with_service_version("1.0.0")
///     .with_service_group("HSF");
/// assert_eq!(defaults.service_group.as_deref(), Some("HSF"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalDefaults {
    /// Default service version
    #[serde(alias = "service-version")]
    pub service_version: Option<String>,

    /// Default service group
    #[serde(alias = "service-group")]
    pub service_group: Option<String>,

    /// Default client call timeout (milliseconds)
    #[serde(alias = "client-timeout")]
    pub client_timeout: Option<u32>,

    /// Default client idle timeout (seconds)
    #[serde(alias = "client-idle-timeout")]
    pub client_idle_timeout: Option<u32>,
}

impl GlobalDefaults {
    /// Create empty defaults (everything falls back to built-ins)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default service version
    pub fn with_service_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    /// Set the default service group
    pub fn with_service_group(mut self, group: impl Into<String>) -> Self {
        self.service_group = Some(group.into());
        self
    }

    /// Set the default client timeout
    pub fn with_client_timeout(mut self, timeout_ms: u32) -> Self {
        self.client_timeout = Some(timeout_ms);
        self
    }

    /// Set the default client idle timeout
    pub fn with_client_idle_timeout(mut self, timeout_secs: u32) -> Self {
        self.client_idle_timeout = Some(timeout_secs);
        self
    }
}
