//! Consumer field resolution
//!
//! Each field carrying consumer metadata becomes one remote endpoint
//! reference, registered under the explicit name or the field name. An
//! existing entry with that name is left alone, so rescanning never
//! duplicates references.

use crate::error::ResolveError;
use crate::merge::non_blank;
use crate::method_special::parse_method_specials;
use crate::placeholder::{NoopResolver, ValueResolver};
use hsfconf_domain::{ConsumerEndpoint, ConsumerField, EndpointDefinition, EndpointRegistry};
use std::sync::Arc;
use tracing::{debug, info};

/// What happened to a consumer field during registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsumerOutcome {
    /// A new entry was stored under this name
    Registered(String),
    /// An entry with this name already existed
    AlreadyPresent(String),
}

impl ConsumerOutcome {
    /// Entry name the field maps to
    pub fn name(&self) -> &str {
        match self {
            ConsumerOutcome::Registered(name) | ConsumerOutcome::AlreadyPresent(name) => name,
        }
    }
}

/// Builds consumer endpoint references
pub struct ConsumerResolver {
    values: Arc<dyn ValueResolver>,
}

impl ConsumerResolver {
    /// Create a resolver that takes metadata values verbatim
    pub fn new() -> Self {
        Self::with_value_resolver(Arc::new(NoopResolver))
    }

    /// Create a resolver that expands placeholders with `values`
    pub fn with_value_resolver(values: Arc<dyn ValueResolver>) -> Self {
        Self { values }
    }

    /// Registry entry name for a field
    pub fn entry_name(field: &ConsumerField) -> String {
        non_blank(field.metadata.name.clone()).unwrap_or_else(|| field.field.clone())
    }

    /// Build the reference for a field
    pub fn resolve(&self, field: &ConsumerField) -> ConsumerEndpoint {
        let metadata = &field.metadata;
        if !metadata.asyncall_methods.is_empty() {
            debug!(
                field = %field.field,
                "asyncall_methods is not supported and will be ignored"
            );
        }

        ConsumerEndpoint {
            interface_name: field.type_name.clone(),
            version: self.resolve_value(Some(metadata.version.as_str())),
            group: self.resolve_value(metadata.group.as_deref()),
            target: self.resolve_value(metadata.target.as_deref()),
            method_specials: parse_method_specials(&metadata.method_specials),
        }
    }

    /// Register the field's reference unless its name is already taken
    pub fn register<R>(
        &self,
        field: &ConsumerField,
        registry: &mut R,
    ) -> Result<ConsumerOutcome, ResolveError>
    where
        R: EndpointRegistry + ?Sized,
    {
        let name = Self::entry_name(field);
        if registry.contains(&name) {
            debug!(name = %name, "Consumer entry already registered, skipping");
            return Ok(ConsumerOutcome::AlreadyPresent(name));
        }

        let endpoint = self.resolve(field);
        debug!(
            name = %name,
            interface = %endpoint.interface_name,
            version = ?endpoint.version,
            "Resolved consumer endpoint"
        );

        let stored = registry
            .register_if_absent(&name, EndpointDefinition::Consumer(endpoint))
            .map_err(|e| ResolveError::Registry(e.to_string()))?;
        if !stored {
            return Ok(ConsumerOutcome::AlreadyPresent(name));
        }

        info!(name = %name, field = %field.field, "Registered consumer endpoint");
        Ok(ConsumerOutcome::Registered(name))
    }

    fn resolve_value(&self, raw: Option<&str>) -> Option<String> {
        non_blank(raw.map(|value| self.values.resolve(value)))
    }
}

impl Default for ConsumerResolver {
    fn default() -> Self {
        Self::new()
    }
}
