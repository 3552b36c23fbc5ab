//! Bookkeeping of declaration names emitted during one generation run.

/// Name given to declarations that have no usable title.
pub const UNKNOWN: &str = "unknown";

/// The first whitespace-delimited word of a title, or `None` for a blank title.
pub fn derived_name(title: &str) -> Option<&str> {
    title.split_whitespace().next()
}

/// Ordered record of the derived names registered in a run.
///
/// Created empty per run and handed through the walk explicitly; nothing
/// outlives the call that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeNameRegistry {
    names: Vec<String>,
}

impl TypeNameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name`, returning `true` if it had not been registered before.
    pub fn register(&mut self, name: &str) -> bool {
        let fresh = !self.contains(name);
        self.names.push(name.to_string());
        fresh
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names in registration order, repeats included.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_name_takes_first_word() {
        assert_eq!(derived_name("Line Item"), Some("Line"));
        assert_eq!(derived_name("  Order\tRoot "), Some("Order"));
        assert_eq!(derived_name("address"), Some("address"));
        assert_eq!(derived_name("   "), None);
        assert_eq!(derived_name(""), None);
    }

    #[test]
    fn test_register_keeps_order_and_repeats() {
        let mut registry = TypeNameRegistry::new();
        assert!(registry.register("Line"));
        assert!(registry.register("Order"));
        assert!(!registry.register("Line"));
        assert_eq!(registry.names(), &["Line", "Order", "Line"]);
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("Order"));
        assert!(!registry.contains("Missing"));
    }
}
