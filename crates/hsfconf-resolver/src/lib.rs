//! hsfconf Resolver
//!
//! Turns declarative service metadata into endpoint definitions ready for
//! the RPC runtime.
//!
//! # Overview
//!
//! Two pipelines share one set of rules:
//!
//! - **Consumers**: every field carrying consumer metadata becomes a remote
//!   reference registered under its explicit name or field name, once.
//! - **Providers**: every type carrying export metadata becomes a published
//!   endpoint registered under a generated name, never autowired.
//!
//! Both use [`merge`] for layered values and [`parse_method_specials`] for
//! per-method timeouts. Providers additionally use [`infer_interface`].
//!
//! # Architecture
//!
//! ```text
//! MetadataReader → Scanner → {ProviderResolver, ConsumerResolver} → EndpointRegistry
//! ```
//!
//! # Example Usage
//!
//! ```
//! use hsfconf_domain::{ComponentDescriptor, ComponentManifest, ExportMetadata, GlobalDefaults};
//! use hsfconf_registry::InMemoryRegistry;
//! use hsfconf_resolver::Scanner;
//!
//! let mut manifest = ComponentManifest::new();
//! manifest.push(
//!     ComponentDescriptor::new("fooImpl", "com.example.FooImpl")
//!         .implementing("com.example.Foo")
//!         .exported(ExportMetadata::default()),
//! );
//!
//! let defaults = GlobalDefaults::new().with_service_version("1.0.0");
//! let mut registry = InMemoryRegistry::new();
//! let report = Scanner::new(defaults).scan(&manifest, &mut registry);
//!
//! assert!(report.is_success());
//! assert_eq!(report.providers.len(), 1);
//! ```

#![warn(missing_docs)]

mod consumer;
mod error;
mod interface;
mod merge;
mod method_special;
mod placeholder;
mod provider;
mod scanner;

pub use consumer::{ConsumerOutcome, ConsumerResolver};
pub use error::ResolveError;
pub use interface::infer_interface;
pub use merge::{merge, non_blank, Presence, UNSET_INT};
pub use method_special::parse_method_specials;
pub use placeholder::{NoopResolver, PropertyResolver, ValueResolver};
pub use provider::{ProviderExport, ProviderResolver};
pub use scanner::{ConsumerRegistration, ProviderRegistration, ScanFailure, ScanReport, Scanner};
