//! hsfconf Domain Layer
//!
//! Core vocabulary for resolving declarative HSF service metadata into
//! endpoint definitions. This crate holds no resolution logic of its own;
//! it defines the values that flow through the resolver and the trait
//! seams the host container implements.
//!
//! ## Key Concepts
//!
//! - **Consumer metadata**: attached to a field, describes a remote service the component calls
//! - **Export metadata**: attached to a type, describes a local implementation published for remote callers
//! - **Global defaults**: process-wide version, group and timeouts supplied once at startup
//! - **Endpoint definition**: the immutable, fully resolved record stored in the registry
//!
//! ## Boundaries
//!
//! - [`MetadataReader`] is implemented by whatever exposes component metadata
//! - [`EndpointRegistry`] is implemented by the container that stores definitions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod defaults;
pub mod endpoint;
pub mod manifest;
pub mod metadata;
pub mod traits;

// Re-exports for convenience
pub use defaults::GlobalDefaults;
pub use endpoint::{ConsumerEndpoint, EndpointDefinition, EndpointKind, MethodSpecial, ProviderEndpoint};
pub use manifest::{ComponentDescriptor, ComponentManifest};
pub use metadata::{ConsumerField, ConsumerMetadata, ExportMetadata, ProviderType, SerializeType};
pub use traits::{EndpointRegistry, MetadataReader};
