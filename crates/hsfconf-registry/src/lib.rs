//! hsfconf Registry
//!
//! In-memory store of resolved endpoint definitions.
//!
//! The registry is mutated only during single-threaded container bootstrap,
//! so it takes `&mut self` and carries no locks. After bootstrap it is read
//! by the RPC runtime.
//!
//! # Examples
//!
//! ```
//! use hsfconf_domain::{ConsumerEndpoint, EndpointDefinition, EndpointRegistry};
//! use hsfconf_registry::InMemoryRegistry;
//!
//! let mut registry = InMemoryRegistry::new();
//! let definition = EndpointDefinition::Consumer(ConsumerEndpoint {
//!     interface_name: "com.example.ItemService".to_string(),
//!     version: Some("1.0.0".to_string()),
//!     group: None,
//!     target: None,
//!     method_specials: None,
//! });
//!
//! assert!(registry.register_if_absent("itemService", definition.clone()).unwrap());
//! assert!(!registry.register_if_absent("itemService", definition).unwrap());
//! assert_eq!(registry.len(), 1);
//! ```

#![warn(missing_docs)]

mod naming;
mod registry;

pub use naming::NameGenerator;
pub use registry::{InMemoryRegistry, RegistryEntry, RegistryError};
