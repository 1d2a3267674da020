//! Metadata descriptors read from components
//!
//! These are the structured forms of the two declarative markers: consumer
//! metadata on fields and export metadata on types. They are produced by a
//! [`MetadataReader`](crate::MetadataReader) once per component and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interface name used by the declarative layer to mean "no interface declared"
pub const NO_INTERFACE_MARKER: &str = "java.io.Serializable";

/// Consumer metadata attached to a single field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerMetadata {
    /// Registry entry name; the field name is used when absent
    pub name: Option<String>,

    /// Target address of the remote service (host:port)
    pub target: Option<String>,

    /// Version of the remote service
    pub version: String,

    /// Group the remote service belongs to
    pub group: Option<String>,

    /// Raw per-method timeout overrides, `"methodName:timeoutMs"`
    pub method_specials: Vec<String>,

    /// Methods to call asynchronously (accepted but not supported)
    pub asyncall_methods: Vec<String>,
}

/// A field carrying consumer metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerField {
    /// Declared field name
    pub field: String,

    /// Identifier of the field's declared type (the remote interface)
    pub type_name: String,

    /// Metadata attached to the field
    #[serde(flatten)]
    pub metadata: ConsumerMetadata,
}

/// Serialization mode of a published endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SerializeType {
    /// Plain platform serialization
    #[default]
    #[serde(rename = "plain", alias = "java")]
    Plain,
    /// Hessian
    #[serde(rename = "hessian")]
    Hessian,
    /// Hessian 2
    #[serde(rename = "hessian2")]
    Hessian2,
}

impl SerializeType {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SerializeType::Plain => "plain",
            SerializeType::Hessian => "hessian",
            SerializeType::Hessian2 => "hessian2",
        }
    }
}

impl fmt::Display for SerializeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SerializeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" | "plain" => Ok(SerializeType::Plain),
            "hessian" => Ok(SerializeType::Hessian),
            "hessian2" => Ok(SerializeType::Hessian2),
            _ => Err(format!("Invalid serialize type: {}", s)),
        }
    }
}

/// Export metadata attached to a provider type
///
/// Optional fields left as `None` (or empty strings) fall through the
/// precedence chain to global defaults and then to built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportMetadata {
    /// Shorthand for the target reference
    pub value: Option<String>,

    /// Explicit exposed interface; `None` or [`NO_INTERFACE_MARKER`] means infer it
    pub service_interface: Option<String>,

    /// Name of the component implementing the service
    pub target: Option<String>,

    /// Service version
    pub service_version: Option<String>,

    /// Management name of the service
    pub service_name: Option<String>,

    /// Human readable description
    pub service_desc: Option<String>,

    /// Service group
    pub service_group: Option<String>,

    /// Whether the service supports asynchronous calls
    pub support_asyn_call: bool,

    /// Client call timeout in milliseconds
    pub client_timeout: Option<u32>,

    /// Client connection idle timeout in seconds
    pub client_idle_timeout: Option<u32>,

    /// Raw per-method timeout overrides, `"methodName:timeoutMs"`
    pub method_specials: Vec<String>,

    /// Serialization mode
    pub serialize_type: SerializeType,

    /// Method that receives the caller's IP address
    pub method_to_inject_consumer_ip: Option<String>,
}

/// A component type carrying export metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderType {
    /// Registered name of the implementing component
    pub component: String,

    /// Identifier of the implementing type
    pub type_name: String,

    /// Interfaces the type implements directly, in declaration order
    pub interfaces: Vec<String>,

    /// Export metadata attached to the type
    pub export: ExportMetadata,
}
