//! Batch scanning of registered components
//!
//! Runs both resolvers over every component a [`MetadataReader`] exposes.
//! Failures are isolated per component: a provider type whose interface
//! cannot be inferred is recorded in the report while the rest of the
//! batch proceeds.

use crate::consumer::{ConsumerOutcome, ConsumerResolver};
use crate::error::ResolveError;
use crate::placeholder::{NoopResolver, ValueResolver};
use crate::provider::ProviderResolver;
use hsfconf_domain::{EndpointRegistry, GlobalDefaults, MetadataReader};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

/// A provider endpoint registered during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRegistration {
    /// Implementing component
    pub component: String,
    /// Exposed interface
    pub interface: String,
    /// Generated registry name
    pub name: String,
}

/// A consumer field seen during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerRegistration {
    /// Component declaring the field
    pub component: String,
    /// Field name
    pub field: String,
    /// Registry entry name
    pub name: String,
}

/// A component that could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    /// Component being processed
    pub component: String,
    /// Type or field that failed
    pub subject: String,
    /// Cause
    pub error: ResolveError,
}

/// Outcome of one scan
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Newly published providers
    pub providers: Vec<ProviderRegistration>,
    /// Provider components whose earlier export is still in the registry
    pub providers_skipped: Vec<String>,
    /// Newly registered consumer references
    pub consumers: Vec<ConsumerRegistration>,
    /// Consumer fields whose entry name was already registered
    pub consumers_skipped: Vec<ConsumerRegistration>,
    /// Isolated failures
    pub failures: Vec<ScanFailure>,
}

impl ScanReport {
    /// Whether every component resolved
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Fail loudly if any component failed
    pub fn ensure_success(&self) -> Result<(), ResolveError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(ResolveError::ScanFailed(self.failures.len()))
        }
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "{} provider(s) exported, {} consumer(s) registered, {} skipped, {} failure(s)",
            self.providers.len(),
            self.consumers.len(),
            self.providers_skipped.len() + self.consumers_skipped.len(),
            self.failures.len()
        )
    }
}

/// Resolves every component in a container
pub struct Scanner {
    consumers: ConsumerResolver,
    providers: ProviderResolver,
    /// Component name to the generated name of its published entry
    exported: HashMap<String, String>,
}

impl Scanner {
    /// Create a scanner with the given global defaults
    pub fn new(defaults: GlobalDefaults) -> Self {
        Self::with_value_resolver(defaults, Arc::new(NoopResolver))
    }

    /// Create a scanner that expands placeholders with `values`
    pub fn with_value_resolver(defaults: GlobalDefaults, values: Arc<dyn ValueResolver>) -> Self {
        Self {
            consumers: ConsumerResolver::with_value_resolver(Arc::clone(&values)),
            providers: ProviderResolver::with_value_resolver(defaults, values),
            exported: HashMap::new(),
        }
    }

    /// Scan all components: provider types first, then consumer fields
    pub fn scan<M, R>(&mut self, reader: &M, registry: &mut R) -> ScanReport
    where
        M: MetadataReader + ?Sized,
        R: EndpointRegistry + ?Sized,
    {
        let mut report = ScanReport::default();
        let components = reader.component_names();
        info!("Scanning {} component(s)", components.len());

        for component in &components {
            self.scan_provider(reader, registry, component, &mut report);
        }
        for component in &components {
            self.scan_consumers(reader, registry, component, &mut report);
        }

        if report.is_success() {
            info!("{}", report.summary());
        } else {
            error!("{}", report.summary());
        }
        report
    }

    fn scan_provider<M, R>(
        &mut self,
        reader: &M,
        registry: &mut R,
        component: &str,
        report: &mut ScanReport,
    ) where
        M: MetadataReader + ?Sized,
        R: EndpointRegistry + ?Sized,
    {
        let Some(provider) = reader.provider_type(component) else {
            return;
        };
        if let Some(name) = self.exported.get(component) {
            if registry.contains(name) {
                report.providers_skipped.push(component.to_string());
                return;
            }
        }

        match self.providers.export(&provider, registry) {
            Ok(exported) => {
                self.exported.insert(component.to_string(), exported.name.clone());
                report.providers.push(ProviderRegistration {
                    component: component.to_string(),
                    interface: exported.service_interface,
                    name: exported.name,
                });
            }
            Err(e) => {
                error!(component = %component, type_name = %provider.type_name, "{}", e);
                report.failures.push(ScanFailure {
                    component: component.to_string(),
                    subject: provider.type_name.clone(),
                    error: e,
                });
            }
        }
    }

    fn scan_consumers<M, R>(
        &self,
        reader: &M,
        registry: &mut R,
        component: &str,
        report: &mut ScanReport,
    ) where
        M: MetadataReader + ?Sized,
        R: EndpointRegistry + ?Sized,
    {
        for field in reader.consumer_fields(component) {
            match self.consumers.register(&field, registry) {
                Ok(outcome) => {
                    let registration = ConsumerRegistration {
                        component: component.to_string(),
                        field: field.field.clone(),
                        name: outcome.name().to_string(),
                    };
                    match outcome {
                        ConsumerOutcome::Registered(_) => report.consumers.push(registration),
                        ConsumerOutcome::AlreadyPresent(_) => {
                            report.consumers_skipped.push(registration)
                        }
                    }
                }
                Err(e) => {
                    error!(component = %component, field = %field.field, "{}", e);
                    report.failures.push(ScanFailure {
                        component: component.to_string(),
                        subject: field.field.clone(),
                        error: e,
                    });
                }
            }
        }
    }
}
