//! Embedded value resolution for metadata strings
//!
//! Metadata values may reference properties as `${key}` or
//! `${key:default}`. Resolution happens before precedence merging.

use std::collections::HashMap;
use tracing::warn;

const PLACEHOLDER_PREFIX: &str = "${";
const PLACEHOLDER_SUFFIX: char = '}';
const DEFAULT_SEPARATOR: char = ':';

/// Resolves embedded values in metadata strings
pub trait ValueResolver {
    /// Resolve every placeholder in `raw`
    fn resolve(&self, raw: &str) -> String;
}

/// Returns every value verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

impl ValueResolver for NoopResolver {
    fn resolve(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// Resolves placeholders from a property map
///
/// # Examples
///
/// ```
/// use hsfconf_resolver::{PropertyResolver, ValueResolver};
///
/// let resolver = PropertyResolver::new([("item.version", "1.2.0")]);
/// assert_eq!(resolver.resolve("${item.version}"), "1.2.0");
/// assert_eq!(resolver.resolve("${item.group:HSF}"), "HSF");
/// assert_eq!(resolver.resolve("plain"), "plain");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyResolver {
    properties: HashMap<String, String>,
}

impl PropertyResolver {
    /// Create a resolver over the given properties
    pub fn new<I, K, V>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Number of known properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether no properties are known
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    fn lookup(&self, expression: &str) -> Option<String> {
        let (key, default) = match expression.split_once(DEFAULT_SEPARATOR) {
            Some((key, default)) => (key.trim(), Some(default)),
            None => (expression.trim(), None),
        };
        self.properties
            .get(key)
            .cloned()
            .or_else(|| default.map(str::to_string))
    }
}

impl ValueResolver for PropertyResolver {
    fn resolve(&self, raw: &str) -> String {
        let mut resolved = String::with_capacity(raw.len());
        let mut rest = raw;

        while let Some(start) = rest.find(PLACEHOLDER_PREFIX) {
            let after_prefix = &rest[start + PLACEHOLDER_PREFIX.len()..];
            let Some(end) = after_prefix.find(PLACEHOLDER_SUFFIX) else {
                break;
            };

            resolved.push_str(&rest[..start]);
            let expression = &after_prefix[..end];
            match self.lookup(expression) {
                Some(value) => resolved.push_str(&value),
                None => {
                    warn!("Could not resolve placeholder ${{{}}}", expression);
                    resolved.push_str(&rest[start..start + PLACEHOLDER_PREFIX.len() + end + 1]);
                }
            }
            rest = &after_prefix[end + 1..];
        }

        resolved.push_str(rest);
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> PropertyResolver {
        PropertyResolver::new([("version", "2.0.0"), ("host", "10.0.0.1"), ("port", "12200")])
    }

    #[test]
    fn test_noop_resolver() {
        assert_eq!(NoopResolver.resolve("${version}"), "${version}");
    }

    #[test]
    fn test_whole_value_placeholder() {
        assert_eq!(resolver().resolve("${version}"), "2.0.0");
    }

    #[test]
    fn test_embedded_placeholders() {
        assert_eq!(resolver().resolve("${host}:${port}"), "10.0.0.1:12200");
        assert_eq!(resolver().resolve("v${version}-beta"), "v2.0.0-beta");
    }

    #[test]
    fn test_default_value() {
        assert_eq!(resolver().resolve("${group:HSF}"), "HSF");
        assert_eq!(resolver().resolve("${version:1.0.0}"), "2.0.0");
        assert_eq!(resolver().resolve("${group:}"), "");
    }

    #[test]
    fn test_unknown_placeholder_left_verbatim() {
        assert_eq!(resolver().resolve("${missing}"), "${missing}");
        assert_eq!(resolver().resolve("a-${missing}-${version}"), "a-${missing}-2.0.0");
    }

    #[test]
    fn test_unterminated_placeholder_left_verbatim() {
        assert_eq!(resolver().resolve("${version"), "${version");
    }

    #[test]
    fn test_len() {
        assert_eq!(resolver().len(), 3);
        assert!(PropertyResolver::default().is_empty());
    }
}
