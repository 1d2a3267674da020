//! Precedence merging of configuration layers
//!
//! A value is taken from the most specific layer that actually sets it:
//! declared metadata, then the declaration-level override, then the
//! fallback. Strings are unset when blank, optional values when `None`,
//! and signed integers when equal to [`UNSET_INT`].

/// Sentinel for "no integer override" at descriptor boundaries
pub const UNSET_INT: i64 = -1;

/// Whether a configuration value is actually set
pub trait Presence {
    /// `true` if the value should win over lower layers
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Presence for &str {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        self.as_str().is_present()
    }
}

impl Presence for i32 {
    fn is_present(&self) -> bool {
        i64::from(*self) != UNSET_INT
    }
}

impl Presence for i64 {
    fn is_present(&self) -> bool {
        *self != UNSET_INT
    }
}

impl Presence for u32 {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

/// Pick the highest-priority present value
///
/// # Examples
///
/// ```
/// use hsfconf_resolver::merge;
///
/// assert_eq!(merge("2.0.0", "", "1.0.0"), "2.0.0");
/// assert_eq!(merge("", "1.1.0", "1.0.0"), "1.1.0");
/// assert_eq!(merge("", "", "1.0.0"), "1.0.0");
/// assert_eq!(merge(-1, 500, 3000), 500);
/// ```
pub fn merge<T: Presence>(declared: T, override_value: T, fallback: T) -> T {
    if declared.is_present() {
        declared
    } else if override_value.is_present() {
        override_value
    } else {
        fallback
    }
}

/// Keep an optional string only if it has text
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| v.is_present())
}
