//! Email address format check.
//!
//! Grammar: word characters, dots, or hyphens in the local part, `@`, a
//! domain of the same character set, a dot, and a word-character top-level
//! label. Missing cells are skipped; requiredness belongs to `NotNull`.

use std::sync::LazyLock;

use regex::Regex;
use tis_model::{Column, ConstraintKind, Violation};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email regex"));

pub fn check(column: &Column, field: &str) -> Option<Violation> {
    let mut offenders = Vec::new();

    for (row, cell) in column.iter() {
        let Some(value) = cell else {
            continue;
        };
        if !EMAIL_RE.is_match(value.trim()) {
            offenders.push((row, Some(value.to_string())));
        }
    }

    if offenders.is_empty() {
        return None;
    }
    let message = format!("{field} has {} invalid email address(es)", offenders.len());
    Some(Violation::from_offenders(
        field,
        ConstraintKind::EmailFormat,
        offenders,
        message,
    ))
}
