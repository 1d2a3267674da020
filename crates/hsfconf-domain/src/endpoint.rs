//! Resolved endpoint definitions
//!
//! The output of resolution. A definition is built once, never mutated, and
//! lives as long as its registry entry.

use crate::metadata::SerializeType;
use serde::{Deserialize, Serialize};

/// Runtime class configured by consumer definitions
pub const CONSUMER_RUNTIME_CLASS: &str = "com.taobao.hsf.app.spring.util.HSFSpringConsumerBean";

/// Runtime class configured by provider definitions
pub const PROVIDER_RUNTIME_CLASS: &str = "com.taobao.hsf.app.spring.util.HSFSpringProviderBean";

/// Runtime class of a per-method override
pub const METHOD_SPECIAL_CLASS: &str = "com.taobao.hsf.model.metadata.MethodSpecial";

/// Init method the runtime calls after configuration
pub const INIT_METHOD: &str = "init";

/// Per-method timeout override
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSpecial {
    /// Method the override applies to
    pub method_name: String,

    /// Client timeout for that method (milliseconds)
    pub client_timeout: u32,
}

impl MethodSpecial {
    /// Create a new override
    pub fn new(method_name: impl Into<String>, client_timeout: u32) -> Self {
        Self {
            method_name: method_name.into(),
            client_timeout,
        }
    }
}

/// Remote endpoint reference for a consumer field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerEndpoint {
    /// Remote interface (the field's declared type)
    pub interface_name: String,

    /// Remote service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Remote service group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Target address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Per-method overrides; absent rather than empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_specials: Option<Vec<MethodSpecial>>,
}

/// Published endpoint for a provider type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoint {
    /// Exposed interface
    pub service_interface: String,

    /// Registry name of the implementing component
    pub target: String,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_version: Option<String>,

    /// Management name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,

    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_desc: Option<String>,

    /// Service group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_group: Option<String>,

    /// Asynchronous call support
    pub support_asyn_call: bool,

    /// Client call timeout (milliseconds)
    pub client_timeout: u32,

    /// Client idle timeout (seconds)
    pub client_idle_timeout: u32,

    /// Serialization mode
    pub serialize_type: SerializeType,

    /// Per-method overrides; absent rather than empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_specials: Option<Vec<MethodSpecial>>,

    /// Method that receives the caller's IP address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_to_inject_consumer_ip: Option<String>,
}

/// Kind of endpoint a definition configures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKind {
    /// Remote service reference
    Consumer,
    /// Published local service
    Provider,
}

impl EndpointKind {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointKind::Consumer => "consumer",
            EndpointKind::Provider => "provider",
        }
    }

    /// Runtime class the definition instantiates
    pub fn runtime_class(&self) -> &'static str {
        match self {
            EndpointKind::Consumer => CONSUMER_RUNTIME_CLASS,
            EndpointKind::Provider => PROVIDER_RUNTIME_CLASS,
        }
    }
}

/// A resolved definition stored in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EndpointDefinition {
    /// Consumer reference
    Consumer(ConsumerEndpoint),
    /// Published provider
    Provider(ProviderEndpoint),
}

impl EndpointDefinition {
    /// Kind of this definition
    pub fn kind(&self) -> EndpointKind {
        match self {
            EndpointDefinition::Consumer(_) => EndpointKind::Consumer,
            EndpointDefinition::Provider(_) => EndpointKind::Provider,
        }
    }

    /// Interface the endpoint speaks
    pub fn interface_name(&self) -> &str {
        match self {
            EndpointDefinition::Consumer(c) => &c.interface_name,
            EndpointDefinition::Provider(p) => &p.service_interface,
        }
    }

    /// Version, if any
    pub fn version(&self) -> Option<&str> {
        match self {
            EndpointDefinition::Consumer(c) => c.version.as_deref(),
            EndpointDefinition::Provider(p) => p.service_version.as_deref(),
        }
    }

    /// Group, if any
    pub fn group(&self) -> Option<&str> {
        match self {
            EndpointDefinition::Consumer(c) => c.group.as_deref(),
            EndpointDefinition::Provider(p) => p.service_group.as_deref(),
        }
    }

    /// Per-method overrides, if any
    pub fn method_specials(&self) -> Option<&[MethodSpecial]> {
        match self {
            EndpointDefinition::Consumer(c) => c.method_specials.as_deref(),
            EndpointDefinition::Provider(p) => p.method_specials.as_deref(),
        }
    }

    /// Runtime class the definition instantiates
    pub fn runtime_class(&self) -> &'static str {
        self.kind().runtime_class()
    }

    /// Init method called by the runtime
    pub fn init_method(&self) -> &'static str {
        INIT_METHOD
    }

    /// Borrow as a provider endpoint
    pub fn as_provider(&self) -> Option<&ProviderEndpoint> {
        match self {
            EndpointDefinition::Provider(p) => Some(p),
            EndpointDefinition::Consumer(_) => None,
        }
    }

    /// Borrow as a consumer endpoint
    pub fn as_consumer(&self) -> Option<&ConsumerEndpoint> {
        match self {
            EndpointDefinition::Consumer(c) => Some(c),
            EndpointDefinition::Provider(_) => None,
        }
    }
}
