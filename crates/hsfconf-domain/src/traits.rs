//! Trait definitions for external interactions
//!
//! The resolver never inspects components itself. The host container
//! exposes metadata through [`MetadataReader`] and stores results through
//! [`EndpointRegistry`].

use crate::{ConsumerField, EndpointDefinition, ProviderType};
use std::fmt::Display;

/// Source of declarative metadata for registered components
///
/// Implemented by the host container (or by a manifest loader in tests and tooling)
pub trait MetadataReader {
    /// Names of all registered components, in registration order
    fn component_names(&self) -> Vec<String>;

    /// Fields of a component that carry consumer metadata
    fn consumer_fields(&self, component: &str) -> Vec<ConsumerField>;

    /// Export metadata of a component's type, if it carries any
    fn provider_type(&self, component: &str) -> Option<ProviderType>;
}

/// Store of named endpoint definitions
///
/// Implemented by the infrastructure layer (hsfconf-registry)
pub trait EndpointRegistry {
    /// Error type for registry operations
    type Error: Display;

    /// Whether a definition with this name exists
    fn contains(&self, name: &str) -> bool;

    /// Register under `name` unless that name is taken
    ///
    /// Returns `true` if the definition was stored, `false` if an entry
    /// already existed and was left untouched.
    fn register_if_absent(
        &mut self,
        name: &str,
        definition: EndpointDefinition,
    ) -> Result<bool, Self::Error>;

    /// Register under a freshly generated name derived from `base_name_hint`
    ///
    /// Returns the generated name. Never reuses an existing name.
    fn register_unique(
        &mut self,
        base_name_hint: &str,
        definition: EndpointDefinition,
        autowire_candidate: bool,
    ) -> Result<String, Self::Error>;
}
