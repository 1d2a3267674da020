//! Provider type resolution
//!
//! Each component type carrying export metadata becomes one published
//! endpoint that references the component as its implementation. Published
//! endpoints are registered under generated names and are never autowire
//! candidates.
//!
//! Precedence for each field:
//!
//! | Field | Declared | Global default | Built-in |
//! |-------|----------|----------------|----------|
//! | interface | `service_interface` | - | single implemented interface |
//! | target | `target`, then `value` | - | component name |
//! | version | `service_version` | `service_version` | absent |
//! | group | `service_group` | `service_group` | absent |
//! | client timeout | `client_timeout` | `client_timeout` | 3000 ms |
//! | idle timeout | `client_idle_timeout` | `client_idle_timeout` | 10 s |

use crate::error::ResolveError;
use crate::interface::infer_interface;
use crate::merge::{merge, non_blank};
use crate::method_special::parse_method_specials;
use crate::placeholder::{NoopResolver, ValueResolver};
use hsfconf_domain::defaults::{DEFAULT_CLIENT_IDLE_TIMEOUT_SECS, DEFAULT_CLIENT_TIMEOUT_MS};
use hsfconf_domain::endpoint::PROVIDER_RUNTIME_CLASS;
use hsfconf_domain::{EndpointDefinition, EndpointRegistry, GlobalDefaults, ProviderEndpoint, ProviderType};
use std::sync::Arc;
use tracing::{debug, info};

/// A provider endpoint that has been registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderExport {
    /// Generated registry name
    pub name: String,
    /// Exposed interface
    pub service_interface: String,
}

/// Builds published endpoints from export metadata
pub struct ProviderResolver {
    defaults: GlobalDefaults,
    values: Arc<dyn ValueResolver>,
}

impl ProviderResolver {
    /// Create a resolver over the given global defaults
    pub fn new(defaults: GlobalDefaults) -> Self {
        Self::with_value_resolver(defaults, Arc::new(NoopResolver))
    }

    /// Create a resolver that also expands placeholders with `values`
    pub fn with_value_resolver(defaults: GlobalDefaults, values: Arc<dyn ValueResolver>) -> Self {
        Self { defaults, values }
    }

    /// Global defaults in effect
    pub fn defaults(&self) -> &GlobalDefaults {
        &self.defaults
    }

    /// Build the published endpoint for a provider type
    pub fn resolve(&self, provider: &ProviderType) -> Result<ProviderEndpoint, ResolveError> {
        let export = &provider.export;

        let service_interface = infer_interface(
            export.service_interface.as_deref(),
            &provider.type_name,
            &provider.interfaces,
        )?;

        let target = merge(
            export.target.as_deref().unwrap_or_default(),
            export.value.as_deref().unwrap_or_default(),
            provider.component.as_str(),
        )
        .to_string();

        let service_version = non_blank(merge(
            self.resolve_value(export.service_version.as_deref()),
            None,
            self.defaults.service_version.clone(),
        ));
        let service_group = non_blank(merge(
            self.resolve_value(export.service_group.as_deref()),
            None,
            self.defaults.service_group.clone(),
        ));

        let client_timeout = merge(
            export.client_timeout,
            self.defaults.client_timeout,
            Some(DEFAULT_CLIENT_TIMEOUT_MS),
        )
        .unwrap_or(DEFAULT_CLIENT_TIMEOUT_MS);
        let client_idle_timeout = merge(
            export.client_idle_timeout,
            self.defaults.client_idle_timeout,
            Some(DEFAULT_CLIENT_IDLE_TIMEOUT_SECS),
        )
        .unwrap_or(DEFAULT_CLIENT_IDLE_TIMEOUT_SECS);

        Ok(ProviderEndpoint {
            service_interface,
            target,
            service_version,
            service_name: non_blank(export.service_name.clone()),
            service_desc: non_blank(export.service_desc.clone()),
            service_group,
            support_asyn_call: export.support_asyn_call,
            client_timeout,
            client_idle_timeout,
            serialize_type: export.serialize_type,
            method_specials: parse_method_specials(&export.method_specials),
            method_to_inject_consumer_ip: non_blank(export.method_to_inject_consumer_ip.clone()),
        })
    }

    /// Resolve and register a provider type under a generated name
    ///
    /// Returns the generated registry name alongside the exposed interface.
    pub fn export<R>(
        &self,
        provider: &ProviderType,
        registry: &mut R,
    ) -> Result<ProviderExport, ResolveError>
    where
        R: EndpointRegistry + ?Sized,
    {
        let endpoint = self.resolve(provider)?;
        debug!(
            component = %provider.component,
            interface = %endpoint.service_interface,
            version = ?endpoint.service_version,
            group = ?endpoint.service_group,
            "Resolved provider endpoint"
        );

        let service_interface = endpoint.service_interface.clone();
        let name = registry
            .register_unique(PROVIDER_RUNTIME_CLASS, EndpointDefinition::Provider(endpoint), false)
            .map_err(|e| ResolveError::Registry(e.to_string()))?;

        info!(name = %name, component = %provider.component, "Registered provider endpoint");
        Ok(ProviderExport {
            name,
            service_interface,
        })
    }

    fn resolve_value(&self, raw: Option<&str>) -> Option<String> {
        raw.map(|value| self.values.resolve(value))
    }
}
