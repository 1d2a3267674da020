//! End-to-end scans against the in-memory registry

use hsfconf_domain::{
    ComponentDescriptor, ComponentManifest, ConsumerField, ConsumerMetadata, EndpointKind,
    ExportMetadata, GlobalDefaults, MethodSpecial, SerializeType,
};
use hsfconf_registry::InMemoryRegistry;
use hsfconf_resolver::{PropertyResolver, ResolveError, Scanner};
use std::sync::Arc;

/// Helper to create the global defaults used across scenarios
fn hsf_defaults() -> GlobalDefaults {
    GlobalDefaults::new()
        .with_service_version("1.0.0")
        .with_service_group("HSF")
        .with_client_timeout(3000)
        .with_client_idle_timeout(10)
}

fn consumer_field(field: &str, type_name: &str, metadata: ConsumerMetadata) -> ConsumerField {
    ConsumerField {
        field: field.to_string(),
        type_name: type_name.to_string(),
        metadata,
    }
}

fn versioned(version: &str) -> ConsumerMetadata {
    ConsumerMetadata {
        version: version.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_provider_without_overrides_uses_defaults() {
    let mut manifest = ComponentManifest::new();
    manifest.push(
        ComponentDescriptor::new("fooImpl", "com.example.FooImpl")
            .implementing("Foo")
            .exported(ExportMetadata::default()),
    );

    let mut registry = InMemoryRegistry::new();
    let report = Scanner::new(hsf_defaults()).scan(&manifest, &mut registry);
    assert!(report.is_success());
    assert_eq!(report.providers.len(), 1);

    let entry = registry.get(&report.providers[0].name).unwrap();
    let provider = entry.definition.as_provider().unwrap();
    assert_eq!(provider.service_interface, "Foo");
    assert_eq!(provider.service_version.as_deref(), Some("1.0.0"));
    assert_eq!(provider.service_group.as_deref(), Some("HSF"));
    assert_eq!(provider.client_timeout, 3000);
    assert_eq!(provider.client_idle_timeout, 10);
    assert_eq!(provider.serialize_type, SerializeType::Plain);
    assert!(provider.method_specials.is_none());
    assert_eq!(provider.target, "fooImpl");
    assert!(!entry.autowire_candidate);
}

#[test]
fn test_provider_declared_version_and_method_specials() {
    let export = ExportMetadata {
        service_version: Some("2.0.0".to_string()),
        method_specials: vec!["sum:2000".to_string(), "x".to_string()],
        ..Default::default()
    };
    let mut manifest = ComponentManifest::new();
    manifest.push(
        ComponentDescriptor::new("fooImpl", "com.example.FooImpl")
            .implementing("Foo")
            .exported(export),
    );

    let mut registry = InMemoryRegistry::new();
    let report = Scanner::new(hsf_defaults()).scan(&manifest, &mut registry);

    let provider = registry
        .get(&report.providers[0].name)
        .and_then(|entry| entry.definition.as_provider())
        .unwrap();
    assert_eq!(provider.service_version.as_deref(), Some("2.0.0"));
    assert_eq!(provider.method_specials, Some(vec![MethodSpecial::new("sum", 2000)]));
}

#[test]
fn test_distinct_providers_get_distinct_names() {
    let mut manifest = ComponentManifest::new();
    manifest.push(
        ComponentDescriptor::new("fooImpl", "a.FooImpl")
            .implementing("a.Foo")
            .exported(ExportMetadata::default()),
    );
    manifest.push(
        ComponentDescriptor::new("barImpl", "a.BarImpl")
            .implementing("a.Bar")
            .exported(ExportMetadata::default()),
    );

    let mut registry = InMemoryRegistry::new();
    let report = Scanner::new(hsf_defaults()).scan(&manifest, &mut registry);

    assert_eq!(report.providers.len(), 2);
    assert_ne!(report.providers[0].name, report.providers[1].name);
    assert_ne!(report.providers[0].name, "fooImpl");
    assert_eq!(registry.entries_of(EndpointKind::Provider).count(), 2);
}

#[test]
fn test_ambiguous_provider_is_isolated() {
    let mut manifest = ComponentManifest::new();
    manifest.push(
        ComponentDescriptor::new("multiImpl", "a.MultiImpl")
            .implementing("a.Foo")
            .implementing("a.Bar")
            .exported(ExportMetadata::default()),
    );
    manifest.push(
        ComponentDescriptor::new("fooImpl", "a.FooImpl")
            .implementing("a.Foo")
            .exported(ExportMetadata::default()),
    );
    manifest.push(
        ComponentDescriptor::new("controller", "a.Controller")
            .with_consumer(consumer_field("bar", "a.Bar", versioned("1.0.0"))),
    );

    let mut registry = InMemoryRegistry::new();
    let report = Scanner::new(hsf_defaults()).scan(&manifest, &mut registry);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].component, "multiImpl");
    assert_eq!(report.failures[0].error.type_name(), Some("a.MultiImpl"));
    assert_eq!(report.providers.len(), 1);
    assert_eq!(report.consumers.len(), 1);
    assert_eq!(report.ensure_success(), Err(ResolveError::ScanFailed(1)));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_explicit_interface_with_many_implemented() {
    let export = ExportMetadata {
        service_interface: Some("a.Baz".to_string()),
        ..Default::default()
    };
    let mut manifest = ComponentManifest::new();
    manifest.push(
        ComponentDescriptor::new("multiImpl", "a.MultiImpl")
            .implementing("a.Foo")
            .implementing("a.Bar")
            .implementing("a.Qux")
            .exported(export),
    );

    let mut registry = InMemoryRegistry::new();
    let report = Scanner::new(hsf_defaults()).scan(&manifest, &mut registry);
    assert!(report.is_success());
    assert_eq!(report.providers[0].interface, "a.Baz");
}

#[test]
fn test_consumer_rescan_is_idempotent() {
    let mut manifest = ComponentManifest::new();
    manifest.push(
        ComponentDescriptor::new("controller", "a.Controller")
            .with_consumer(consumer_field("itemService", "a.ItemService", versioned("1.0.0"))),
    );

    let mut registry = InMemoryRegistry::new();
    let mut scanner = Scanner::new(hsf_defaults());
    let first = scanner.scan(&manifest, &mut registry);
    let second = scanner.scan(&manifest, &mut registry);

    assert_eq!(first.consumers.len(), 1);
    assert!(second.consumers.is_empty());
    assert_eq!(second.consumers_skipped.len(), 1);
    assert_eq!(registry.len(), 1);
    assert!(registry.get("itemService").unwrap().autowire_candidate);
}

#[test]
fn test_shared_consumer_name_registered_once() {
    let named = ConsumerMetadata {
        name: Some("items".to_string()),
        ..versioned("1.0.0")
    };
    let mut manifest = ComponentManifest::new();
    manifest.push(
        ComponentDescriptor::new("first", "a.First")
            .with_consumer(consumer_field("itemService", "a.ItemService", named.clone())),
    );
    manifest.push(
        ComponentDescriptor::new("second", "a.Second")
            .with_consumer(consumer_field("otherField", "a.ItemService", named)),
    );

    let mut registry = InMemoryRegistry::new();
    let report = Scanner::new(hsf_defaults()).scan(&manifest, &mut registry);

    assert_eq!(report.consumers.len(), 1);
    assert_eq!(report.consumers_skipped.len(), 1);
    assert_eq!(report.consumers_skipped[0].component, "second");
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_provider_rescan_does_not_duplicate() {
    let mut manifest = ComponentManifest::new();
    manifest.push(
        ComponentDescriptor::new("fooImpl", "a.FooImpl")
            .implementing("a.Foo")
            .exported(ExportMetadata::default()),
    );

    let mut registry = InMemoryRegistry::new();
    let mut scanner = Scanner::new(hsf_defaults());
    scanner.scan(&manifest, &mut registry);
    let second = scanner.scan(&manifest, &mut registry);

    assert!(second.providers.is_empty());
    assert_eq!(second.providers_skipped, vec!["fooImpl"]);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_reused_scanner_populates_fresh_registry() {
    let mut manifest = ComponentManifest::new();
    manifest.push(
        ComponentDescriptor::new("fooImpl", "a.FooImpl")
            .implementing("a.Foo")
            .exported(ExportMetadata::default()),
    );

    let mut scanner = Scanner::new(hsf_defaults());
    let mut first = InMemoryRegistry::new();
    let mut second = InMemoryRegistry::new();
    scanner.scan(&manifest, &mut first);
    let report = scanner.scan(&manifest, &mut second);

    assert_eq!(report.providers.len(), 1);
    assert!(report.providers_skipped.is_empty());
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);

    let rescan = scanner.scan(&manifest, &mut second);
    assert_eq!(rescan.providers_skipped, vec!["fooImpl"]);
    assert_eq!(second.len(), 1);
}

#[test]
fn test_default_provider_serialization_name() {
    let mut manifest = ComponentManifest::new();
    manifest.push(
        ComponentDescriptor::new("fooImpl", "a.FooImpl")
            .implementing("Foo")
            .exported(ExportMetadata::default()),
    );

    let mut registry = InMemoryRegistry::new();
    let report = Scanner::new(hsf_defaults()).scan(&manifest, &mut registry);

    let entry = registry.get(&report.providers[0].name).unwrap();
    let json = serde_json::to_value(&entry.definition).unwrap();
    assert_eq!(json["serialize_type"], "plain");
    assert_eq!(json["service_interface"], "Foo");
}

#[test]
fn test_consumer_gets_no_global_defaults() {
    let mut manifest = ComponentManifest::new();
    manifest.push(
        ComponentDescriptor::new("controller", "a.Controller")
            .with_consumer(consumer_field("itemService", "a.ItemService", versioned("1.0.0"))),
    );

    let mut registry = InMemoryRegistry::new();
    Scanner::new(hsf_defaults()).scan(&manifest, &mut registry);

    let consumer = registry
        .get("itemService")
        .and_then(|entry| entry.definition.as_consumer())
        .unwrap();
    assert_eq!(consumer.interface_name, "a.ItemService");
    assert_eq!(consumer.version.as_deref(), Some("1.0.0"));
    assert!(consumer.group.is_none());
}

#[test]
fn test_placeholders_resolved_across_scan() {
    let metadata = ConsumerMetadata {
        target: Some("${item.host}:12200".to_string()),
        ..versioned("${item.version}")
    };
    let mut manifest = ComponentManifest::new();
    manifest.push(
        ComponentDescriptor::new("controller", "a.Controller")
            .with_consumer(consumer_field("itemService", "a.ItemService", metadata)),
    );

    let values = Arc::new(PropertyResolver::new([
        ("item.version", "1.4.0"),
        ("item.host", "10.1.1.1"),
    ]));
    let mut registry = InMemoryRegistry::new();
    Scanner::with_value_resolver(hsf_defaults(), values).scan(&manifest, &mut registry);

    let consumer = registry
        .get("itemService")
        .and_then(|entry| entry.definition.as_consumer())
        .unwrap();
    assert_eq!(consumer.version.as_deref(), Some("1.4.0"));
    assert_eq!(consumer.target.as_deref(), Some("10.1.1.1:12200"));
}
