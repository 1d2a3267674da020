//! Parse `"methodName:timeoutMs"` overrides
//!
//! Malformed entries are dropped with a warning, never rejected.

use hsfconf_domain::MethodSpecial;
use tracing::warn;

/// Parse raw override strings, preserving input order
///
/// Returns `None` when no entry is valid, so an empty override list is
/// never attached to a definition.
///
/// # Examples
///
/// ```
/// use hsfconf_resolver::parse_method_specials;
///
/// let parsed = parse_method_specials(&["sum:2000", "bad", "echo:500"]).unwrap();
/// assert_eq!(parsed.len(), 2);
/// assert_eq!(parsed[0].method_name, "sum");
/// assert_eq!(parsed[1].client_timeout, 500);
///
/// assert!(parse_method_specials::<&str>(&[]).is_none());
/// ```
pub fn parse_method_specials<S: AsRef<str>>(raw: &[S]) -> Option<Vec<MethodSpecial>> {
    let specials: Vec<MethodSpecial> = raw
        .iter()
        .filter_map(|entry| {
            let entry = entry.as_ref();
            let parsed = parse_entry(entry);
            if parsed.is_none() {
                warn!("Ignoring malformed method special {:?}", entry);
            }
            parsed
        })
        .collect();

    if specials.is_empty() {
        None
    } else {
        Some(specials)
    }
}

/// Parse a single entry, splitting on the first `:`
fn parse_entry(entry: &str) -> Option<MethodSpecial> {
    let (method, timeout) = entry.split_once(':')?;
    let method = method.trim();
    let timeout = timeout.trim();
    if method.is_empty() || timeout.is_empty() {
        return None;
    }

    let timeout: u32 = timeout.parse().ok()?;
    Some(MethodSpecial::new(method, timeout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_malformed_and_keeps_order() {
        let parsed = parse_method_specials(&["sum:2000", "bad", "echo:500"]).unwrap();
        assert_eq!(
            parsed,
            vec![MethodSpecial::new("sum", 2000), MethodSpecial::new("echo", 500)]
        );
    }

    #[test]
    fn test_empty_input_is_absent() {
        let raw: Vec<String> = Vec::new();
        assert!(parse_method_specials(&raw).is_none());
    }

    #[test]
    fn test_all_malformed_is_absent() {
        assert!(parse_method_specials(&["x", ":100", "sum:", ""]).is_none());
    }

    #[test]
    fn test_non_numeric_timeout_dropped() {
        assert!(parse_method_specials(&["sum:fast"]).is_none());
        assert!(parse_method_specials(&["sum:-5"]).is_none());
    }

    #[test]
    fn test_zero_timeout_kept() {
        let parsed = parse_method_specials(&["sum:0", "echo:500"]).unwrap();
        assert_eq!(
            parsed,
            vec![MethodSpecial::new("sum", 0), MethodSpecial::new("echo", 500)]
        );
    }

    #[test]
    fn test_splits_on_first_colon_only() {
        // "b:c" is not a number, so the whole entry is dropped
        assert!(parse_method_specials(&["a:b:c"]).is_none());
    }

    #[test]
    fn test_whitespace_trimmed() {
        let parsed = parse_method_specials(&[" sum : 2000 "]).unwrap();
        assert_eq!(parsed, vec![MethodSpecial::new("sum", 2000)]);
    }

    #[test]
    fn test_duplicate_methods_kept_in_order() {
        let parsed = parse_method_specials(&["sum:1", "sum:2"]).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].client_timeout, 2);
    }
}
