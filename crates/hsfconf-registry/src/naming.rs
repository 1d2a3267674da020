//! Unique name generation for anonymous definitions

/// Separator between the base hint and the counter
const GENERATED_NAME_SEPARATOR: &str = "#";

/// Generates `<hint>#<n>` names, picking the lowest unused `n`
#[derive(Debug, Clone, Default)]
pub struct NameGenerator;

impl NameGenerator {
    /// Create a generator
    pub fn new() -> Self {
        Self
    }

    /// Generate a name not rejected by `is_taken`
    pub fn generate<F>(&self, hint: &str, is_taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        let mut counter: u64 = 0;
        loop {
            let candidate = format!("{hint}{GENERATED_NAME_SEPARATOR}{counter}");
            if !is_taken(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_first_name_uses_zero() {
        let generator = NameGenerator::new();
        assert_eq!(generator.generate("Provider", |_| false), "Provider#0");
    }

    #[test]
    fn test_skips_taken_names() {
        let taken: HashSet<&str> = ["Provider#0", "Provider#1"].into_iter().collect();
        let generator = NameGenerator::new();
        assert_eq!(generator.generate("Provider", |n| taken.contains(n)), "Provider#2");
    }

    #[test]
    fn test_fills_gaps() {
        let taken: HashSet<&str> = ["Provider#1"].into_iter().collect();
        let generator = NameGenerator::new();
        assert_eq!(generator.generate("Provider", |n| taken.contains(n)), "Provider#0");
    }
}
