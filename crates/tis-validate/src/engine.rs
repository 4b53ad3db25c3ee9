//! Validation orchestrator.
//!
//! Runs a template's full rule list against a mapped table in declaration
//! order, skipping rules whose columns are absent, and never stopping early:
//! one pass produces the complete report. The input table is read-only and
//! the run is deterministic, so validating the same pair twice yields an
//! identical report.

use tis_model::{Table, Template, ValidationReport};
use tracing::debug;

use crate::checks::apply_rule;
use crate::error::{Result, ValidateError};
use crate::registry::TemplateRegistry;

/// Validate a table against a template's rules.
pub fn validate(table: &Table, template: &Template) -> ValidationReport {
    let mut report = ValidationReport::new(&template.name);

    for rule in &template.rules {
        if !table.has_column(&rule.field) {
            debug!(
                field = %rule.field,
                kind = %rule.constraint.kind(),
                "skipping rule: field not in table"
            );
            continue;
        }
        if let Some(violation) = apply_rule(table, rule) {
            report.add(violation);
        }
    }

    debug!(
        template = %template.name,
        violations = report.violation_count(),
        "validation complete"
    );
    report
}

/// Orchestrator bound to a template registry.
#[derive(Debug, Clone, Copy)]
pub struct Engine<'a> {
    registry: &'a TemplateRegistry,
}

impl<'a> Engine<'a> {
    pub fn new(registry: &'a TemplateRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        self.registry
    }

    /// Validate against a registered template.
    ///
    /// An unknown template name is a configuration error, not a data
    /// violation.
    pub fn validate_named(&self, table: &Table, template_name: &str) -> Result<ValidationReport> {
        let template = self
            .registry
            .get(template_name)
            .ok_or_else(|| ValidateError::UnknownTemplate(template_name.to_string()))?;
        Ok(validate(table, template))
    }
}
