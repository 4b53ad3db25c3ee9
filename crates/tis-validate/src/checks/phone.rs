//! Phone number format check.
//!
//! A value passes when, after stripping one leading quote-escape character:
//! - its raw length is at most 32 characters,
//! - it starts with a known emergency-service prefix (accepted as-is), or
//! - it matches an optional `+`, a digit, then 8 or more digits, spaces,
//!   parentheses, or hyphens.
//!
//! Missing cells are skipped; requiredness belongs to `NotNull`.

use std::sync::LazyLock;

use regex::Regex;
use tis_model::{Column, ConstraintKind, Violation};

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d[\d\s()-]{8,}$").expect("phone regex"));

/// Short dialing codes accepted without further format checks.
const EMERGENCY_PREFIXES: &[&str] = &["112", "911", "999", "100", "101", "102"];

/// Longest raw value worth parsing as a phone number.
const MAX_RAW_LEN: usize = 32;

fn is_valid_phone(raw: &str) -> bool {
    // Spreadsheet exports escape leading plus signs with a quote.
    let value = raw.strip_prefix('\'').unwrap_or(raw).trim();
    if raw.chars().count() > MAX_RAW_LEN {
        return false;
    }
    let digits = value.strip_prefix('+').unwrap_or(value);
    if EMERGENCY_PREFIXES
        .iter()
        .any(|prefix| digits.starts_with(prefix))
    {
        return true;
    }
    PHONE_RE.is_match(value)
}

pub fn check(column: &Column, field: &str, default_region: &str) -> Option<Violation> {
    let mut offenders = Vec::new();

    for (row, cell) in column.iter() {
        let Some(value) = cell else {
            continue;
        };
        if !is_valid_phone(value) {
            offenders.push((row, Some(value.to_string())));
        }
    }

    if offenders.is_empty() {
        return None;
    }
    let message = format!(
        "{field} has {} invalid phone number(s) (default region {default_region})",
        offenders.len()
    );
    Some(Violation::from_offenders(
        field,
        ConstraintKind::PhoneFormat,
        offenders,
        message,
    ))
}
