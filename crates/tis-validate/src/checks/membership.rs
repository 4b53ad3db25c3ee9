//! Canonical-list membership checks: countries, payment terms, currencies.
//!
//! Values are trimmed, then matched exactly against the canonical list.
//! Missing cells are skipped; pair these constraints with `NotNull` when a
//! field is also mandatory, so blanks and bad values are reported as
//! distinct violations.

use tis_model::{Column, ConstraintKind, Violation};
use tis_standards::{is_canonical_country, is_canonical_currency, is_canonical_term};

fn check_membership(
    column: &Column,
    field: &str,
    kind: ConstraintKind,
    is_member: fn(&str) -> bool,
    list_name: &str,
) -> Option<Violation> {
    let mut offenders = Vec::new();

    for (row, cell) in column.iter() {
        let Some(value) = cell else {
            continue;
        };
        if !is_member(value.trim()) {
            offenders.push((row, Some(value.to_string())));
        }
    }

    if offenders.is_empty() {
        return None;
    }
    let message = format!(
        "{field} has {} value(s) not in the canonical {list_name} list",
        offenders.len()
    );
    Some(Violation::from_offenders(field, kind, offenders, message))
}

pub fn check_country(column: &Column, field: &str) -> Option<Violation> {
    check_membership(
        column,
        field,
        ConstraintKind::CountryEnum,
        is_canonical_country,
        "country",
    )
}

pub fn check_terms(column: &Column, field: &str) -> Option<Violation> {
    check_membership(
        column,
        field,
        ConstraintKind::TermsEnum,
        is_canonical_term,
        "payment terms",
    )
}

pub fn check_currency(column: &Column, field: &str) -> Option<Violation> {
    check_membership(
        column,
        field,
        ConstraintKind::CurrencyEnum,
        is_canonical_currency,
        "currency",
    )
}
