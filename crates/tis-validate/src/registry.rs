//! Template rule-set registry.
//!
//! An explicit, immutable-after-startup map from template name to its
//! ordered rule list. The registry is constructed once and passed by
//! reference into the engine; there is no ambient global state.

use std::collections::BTreeMap;

use tis_model::Template;

use crate::templates::{customer_template, vendor_template};

#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the built-in import templates.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(customer_template());
        registry.register(vendor_template());
        registry
    }

    /// Idempotent upsert: registering the same name again replaces the
    /// previous rule set.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tis_model::Constraint;

    #[test]
    fn builtin_templates_are_registered() {
        let registry = TemplateRegistry::builtin();
        assert!(registry.get("Customer Template").is_some());
        assert!(registry.get("Vendor Template").is_some());
        assert!(registry.get("Missing Template").is_none());
    }

    #[test]
    fn register_is_an_upsert() {
        let mut registry = TemplateRegistry::new();
        registry.register(Template::new("T").with_rule("a", Constraint::Unique));
        registry.register(Template::new("T").with_rule("b", Constraint::NotNull));
        assert_eq!(registry.len(), 1);
        let template = registry.get("T").unwrap();
        assert_eq!(template.rules.len(), 1);
        assert_eq!(template.rules[0].field, "b");
    }
}
