//! In-memory endpoint registry.
//!
//! Entries keep registration order; names are unique.

use crate::naming::NameGenerator;
use hsfconf_domain::{EndpointDefinition, EndpointKind, EndpointRegistry};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Registry error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Name is empty or whitespace only
    #[error("Invalid definition name: {0:?}")]
    InvalidName(String),
}

/// A named definition held by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryEntry {
    /// Unique entry name
    pub name: String,

    /// Whether other components may receive this entry by autowiring
    pub autowire_candidate: bool,

    /// Resolved definition
    pub definition: EndpointDefinition,
}

/// Registry of resolved endpoint definitions
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<String, usize>,
    names: NameGenerator,
}

impl InMemoryRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an entry by name
    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    /// All entries in registration order
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Entries of one kind, in registration order
    pub fn entries_of(&self, kind: EndpointKind) -> impl Iterator<Item = &RegistryEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.definition.kind() == kind)
    }

    /// Entries other components may be autowired with
    pub fn autowire_candidates(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter().filter(|entry| entry.autowire_candidate)
    }

    /// Get entry count
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: String, definition: EndpointDefinition, autowire_candidate: bool) {
        debug!(name = %name, kind = definition.kind().as_str(), "Registering definition");
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(RegistryEntry {
            name,
            autowire_candidate,
            definition,
        });
    }
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    if name.trim().is_empty() {
        return Err(RegistryError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl EndpointRegistry for InMemoryRegistry {
    type Error = RegistryError;

    fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn register_if_absent(
        &mut self,
        name: &str,
        definition: EndpointDefinition,
    ) -> Result<bool, Self::Error> {
        validate_name(name)?;
        if self.contains(name) {
            return Ok(false);
        }
        self.insert(name.to_string(), definition, true);
        Ok(true)
    }

    fn register_unique(
        &mut self,
        base_name_hint: &str,
        definition: EndpointDefinition,
        autowire_candidate: bool,
    ) -> Result<String, Self::Error> {
        validate_name(base_name_hint)?;
        let name = self
            .names
            .generate(base_name_hint, |candidate| self.index.contains_key(candidate));
        self.insert(name.clone(), definition, autowire_candidate);
        Ok(name)
    }
}
