//! Bootstrap file parsing.
//!
//! A bootstrap file declares the process-wide defaults, the property values
//! used for `${...}` placeholders, and the component manifest to scan:
//!
//! ```toml
//! [defaults]
//! service-version = "1.0.0"
//! service-group = "HSF"
//!
//! [properties]
//! "item.version" = "1.2.0"
//!
//! [[components]]
//! name = "fooImpl"
//! type_name = "com.example.FooImpl"
//! interfaces = ["com.example.Foo"]
//!
//! [components.export]
//! method_specials = ["sum:2000"]
//! ```

use crate::error::{CliError, Result};
use hsfconf_domain::{ComponentDescriptor, ComponentManifest, GlobalDefaults};
use hsfconf_resolver::PropertyResolver;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Parsed bootstrap file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Global defaults applied to providers
    #[serde(default, alias = "annotation-driven")]
    pub defaults: GlobalDefaults,

    /// Property values for placeholder resolution
    #[serde(default)]
    pub properties: BTreeMap<String, String>,

    /// Components to scan, in registration order
    #[serde(default)]
    pub components: Vec<ComponentDescriptor>,
}

impl BootstrapConfig {
    /// Load and validate a bootstrap file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate bootstrap TOML.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: BootstrapConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check names and timeouts.
    pub fn validate(&self) -> Result<()> {
        if self.defaults.client_timeout == Some(0) {
            return Err(CliError::Config("defaults.client_timeout must be greater than 0".into()));
        }
        if self.defaults.client_idle_timeout == Some(0) {
            return Err(CliError::Config(
                "defaults.client_idle_timeout must be greater than 0".into(),
            ));
        }

        let mut seen = HashSet::new();
        for component in &self.components {
            if component.name.trim().is_empty() {
                return Err(CliError::Config(format!(
                    "Component of type '{}' has an empty name",
                    component.type_name
                )));
            }
            if !seen.insert(component.name.as_str()) {
                return Err(CliError::Config(format!(
                    "Component '{}' is declared more than once",
                    component.name
                )));
            }
            if let Some(export) = &component.export {
                if export.client_timeout == Some(0) || export.client_idle_timeout == Some(0) {
                    return Err(CliError::Config(format!(
                        "Component '{}' declares a zero timeout",
                        component.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Component manifest for scanning.
    pub fn manifest(&self) -> ComponentManifest {
        ComponentManifest {
            components: self.components.clone(),
        }
    }

    /// Placeholder resolver over the declared properties.
    pub fn value_resolver(&self) -> PropertyResolver {
        PropertyResolver::new(self.properties.clone())
    }
}
