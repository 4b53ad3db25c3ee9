//! Validator primitives.
//!
//! Each module performs one constraint check against a read-only column
//! view and returns at most one [`Violation`] listing every offending row.
//! All checks are pure functions with no shared state; data-shape problems
//! (missing columns, blank cells) are inputs to check, never faults.

mod boolean;
mod conditional;
mod email;
mod hierarchy;
mod length;
mod membership;
mod not_null;
mod phone;
mod unique;

use tis_model::{Constraint, FieldRule, Table, Violation};

/// Run one field rule against a table.
///
/// Returns `None` both when the data passes and when the rule's target
/// column (or, for conditional rules, the condition column) is absent from
/// the table; absent fields are skipped silently per the import-wizard
/// contract.
pub fn apply_rule(table: &Table, rule: &FieldRule) -> Option<Violation> {
    let field = rule.field.as_str();

    if let Constraint::ConditionalRequired {
        when_field,
        when_value,
    } = &rule.constraint
    {
        let condition = table.column(when_field)?;
        let target = table.column(field)?;
        return conditional::check(condition, target, field, when_field, when_value);
    }

    let column = table.column(field)?;
    match &rule.constraint {
        Constraint::Unique => unique::check(column, field),
        Constraint::MaxLength { limit } => length::check(column, field, *limit),
        Constraint::EmailFormat => email::check(column, field),
        Constraint::PhoneFormat { default_region } => phone::check(column, field, default_region),
        Constraint::BooleanEnum => boolean::check(column, field),
        Constraint::SubsidiaryHierarchy => hierarchy::check(column, field),
        Constraint::CountryEnum => membership::check_country(column, field),
        Constraint::NotNull => not_null::check(column, field),
        Constraint::TermsEnum => membership::check_terms(column, field),
        Constraint::CurrencyEnum => membership::check_currency(column, field),
        Constraint::ConditionalRequired { .. } => unreachable!("handled above"),
    }
}
