//! Static component manifest
//!
//! A [`MetadataReader`] backed by plain descriptors, used when component
//! metadata is declared in a bootstrap file rather than read from a live
//! container.

use crate::metadata::{ConsumerField, ExportMetadata, ProviderType};
use crate::traits::MetadataReader;
use serde::{Deserialize, Serialize};

/// Metadata of one registered component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Registered component name
    pub name: String,

    /// Identifier of the component's type
    pub type_name: String,

    /// Interfaces the type implements directly
    #[serde(default)]
    pub interfaces: Vec<String>,

    /// Fields carrying consumer metadata
    #[serde(default)]
    pub consumers: Vec<ConsumerField>,

    /// Export metadata on the type, if any
    #[serde(default)]
    pub export: Option<ExportMetadata>,
}

impl ComponentDescriptor {
    /// Create a descriptor with no metadata
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            interfaces: Vec::new(),
            consumers: Vec::new(),
            export: None,
        }
    }

    /// Add a directly implemented interface
    pub fn implementing(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Add a consumer field
    pub fn with_consumer(mut self, field: ConsumerField) -> Self {
        self.consumers.push(field);
        self
    }

    /// Attach export metadata
    pub fn exported(mut self, export: ExportMetadata) -> Self {
        self.export = Some(export);
        self
    }
}

/// Ordered collection of component descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentManifest {
    /// Components in registration order
    #[serde(default)]
    pub components: Vec<ComponentDescriptor>,
}

impl ComponentManifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component
    pub fn push(&mut self, component: ComponentDescriptor) {
        self.components.push(component);
    }

    /// Look up a component by name
    pub fn get(&self, name: &str) -> Option<&ComponentDescriptor> {
        self.components.iter().find(|c| c.name == name)
    }
}

impl MetadataReader for ComponentManifest {
    fn component_names(&self) -> Vec<String> {
        self.components.iter().map(|c| c.name.clone()).collect()
    }

    fn consumer_fields(&self, component: &str) -> Vec<ConsumerField> {
        self.get(component)
            .map(|c| c.consumers.clone())
            .unwrap_or_default()
    }

    fn provider_type(&self, component: &str) -> Option<ProviderType> {
        let descriptor = self.get(component)?;
        let export = descriptor.export.clone()?;
        Some(ProviderType {
            component: descriptor.name.clone(),
            type_name: descriptor.type_name.clone(),
            interfaces: descriptor.interfaces.clone(),
            export,
        })
    }
}
