//! Target schemas and validation constraints.
//!
//! A [`Template`] is a named schema a mapped dataset must conform to before
//! export: an ordered list of field rules, each binding one [`Constraint`]
//! to one template field. Templates are plain data built once at startup;
//! nothing elsewhere branches on template identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One checkable rule attached to a template field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Constraint {
    /// Value must not repeat within the column.
    Unique,
    /// Field must be populated on rows where `when_field` equals `when_value`
    /// (exact, case-sensitive comparison).
    ConditionalRequired { when_field: String, when_value: String },
    /// Character count must not exceed `limit`.
    MaxLength { limit: usize },
    /// Value must look like an email address.
    EmailFormat,
    /// Value must look like a dialable phone number.
    PhoneFormat { default_region: String },
    /// Value must be a boolean literal (TRUE/FALSE after uppercasing).
    BooleanEnum,
    /// Value must be a colon-separated subsidiary path, pipe-separated for
    /// alternatives; mandatory.
    SubsidiaryHierarchy,
    /// Value must be a canonical country name.
    CountryEnum,
    /// Cell must be populated.
    NotNull,
    /// Value must be a canonical payment term.
    TermsEnum,
    /// Value must be a canonical currency code.
    CurrencyEnum,
}

impl Constraint {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Self::Unique => ConstraintKind::Unique,
            Self::ConditionalRequired { .. } => ConstraintKind::ConditionalRequired,
            Self::MaxLength { .. } => ConstraintKind::MaxLength,
            Self::EmailFormat => ConstraintKind::EmailFormat,
            Self::PhoneFormat { .. } => ConstraintKind::PhoneFormat,
            Self::BooleanEnum => ConstraintKind::BooleanEnum,
            Self::SubsidiaryHierarchy => ConstraintKind::SubsidiaryHierarchy,
            Self::CountryEnum => ConstraintKind::CountryEnum,
            Self::NotNull => ConstraintKind::NotNull,
            Self::TermsEnum => ConstraintKind::TermsEnum,
            Self::CurrencyEnum => ConstraintKind::CurrencyEnum,
        }
    }
}

/// Discriminant tag for [`Constraint`], carried on every violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConstraintKind {
    Unique,
    ConditionalRequired,
    MaxLength,
    EmailFormat,
    PhoneFormat,
    BooleanEnum,
    SubsidiaryHierarchy,
    CountryEnum,
    NotNull,
    TermsEnum,
    CurrencyEnum,
}

impl ConstraintKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unique => "Unique",
            Self::ConditionalRequired => "ConditionalRequired",
            Self::MaxLength => "MaxLength",
            Self::EmailFormat => "EmailFormat",
            Self::PhoneFormat => "PhoneFormat",
            Self::BooleanEnum => "BooleanEnum",
            Self::SubsidiaryHierarchy => "SubsidiaryHierarchy",
            Self::CountryEnum => "CountryEnum",
            Self::NotNull => "NotNull",
            Self::TermsEnum => "TermsEnum",
            Self::CurrencyEnum => "CurrencyEnum",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One constraint bound to one template field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    pub field: String,
    pub constraint: Constraint,
}

/// A named target schema: ordered field rules evaluated in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub rules: Vec<FieldRule>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule, keeping declaration order.
    #[must_use]
    pub fn with_rule(mut self, field: impl Into<String>, constraint: Constraint) -> Self {
        self.rules.push(FieldRule {
            field: field.into(),
            constraint,
        });
        self
    }

    /// Ordered list of distinct field names referenced by this template.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for rule in &self.rules {
            if !names.contains(&rule.field.as_str()) {
                names.push(rule.field.as_str());
            }
        }
        names
    }
}
