//! Canonical payment terms accepted by `TermsEnum` fields.

use std::collections::BTreeSet;
use std::sync::LazyLock;

pub const PAYMENT_TERMS: &[&str] = &[
    "1% 10 Net 30",
    "2% 10 Net 30",
    "Cash on Delivery",
    "Due on Receipt",
    "Net 10",
    "Net 15",
    "Net 30",
    "Net 45",
    "Net 60",
    "Net 90",
];

static TERMS_SET: LazyLock<BTreeSet<&'static str>> =
    LazyLock::new(|| PAYMENT_TERMS.iter().copied().collect());

/// Exact-match membership in the canonical payment-terms list.
pub fn is_canonical_term(value: &str) -> bool {
    TERMS_SET.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_exact() {
        assert!(is_canonical_term("Net 30"));
        assert!(is_canonical_term("Due on Receipt"));
        assert!(!is_canonical_term("net 30"));
        assert!(!is_canonical_term("Net 31"));
    }
}
