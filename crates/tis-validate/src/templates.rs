//! Built-in import templates.
//!
//! Rule sets are data: adding a template means adding one function here and
//! one `register` call in [`crate::registry::TemplateRegistry::builtin`].
//! Field names and length bounds follow the upload templates the wizard
//! ships with.

use tis_model::{Constraint, Template};

/// Customer records: person/company split with conditional name fields.
pub fn customer_template() -> Template {
    Template::new("Customer Template")
        .with_rule("externalId", Constraint::Unique)
        .with_rule("externalId", Constraint::MaxLength { limit: 100 })
        .with_rule("entityId", Constraint::Unique)
        .with_rule("entityId", Constraint::MaxLength { limit: 80 })
        .with_rule("isPerson", Constraint::BooleanEnum)
        .with_rule(
            "companyName",
            Constraint::ConditionalRequired {
                when_field: "isPerson".to_string(),
                when_value: "FALSE".to_string(),
            },
        )
        .with_rule("companyName", Constraint::MaxLength { limit: 83 })
        .with_rule(
            "firstName",
            Constraint::ConditionalRequired {
                when_field: "isPerson".to_string(),
                when_value: "TRUE".to_string(),
            },
        )
        .with_rule("firstName", Constraint::MaxLength { limit: 32 })
        .with_rule(
            "lastName",
            Constraint::ConditionalRequired {
                when_field: "isPerson".to_string(),
                when_value: "TRUE".to_string(),
            },
        )
        .with_rule("lastName", Constraint::MaxLength { limit: 32 })
        .with_rule("email", Constraint::EmailFormat)
        .with_rule("email", Constraint::MaxLength { limit: 300 })
        .with_rule(
            "phone",
            Constraint::PhoneFormat {
                default_region: "US".to_string(),
            },
        )
        .with_rule("phone", Constraint::MaxLength { limit: 21 })
        .with_rule("Address1_line1", Constraint::MaxLength { limit: 150 })
        .with_rule("Address1_city", Constraint::MaxLength { limit: 50 })
        .with_rule("isInactive", Constraint::BooleanEnum)
        .with_rule("subsidiary", Constraint::SubsidiaryHierarchy)
        .with_rule("country", Constraint::NotNull)
        .with_rule("country", Constraint::CountryEnum)
}

/// Vendor records: company-only, with payment terms and currency.
pub fn vendor_template() -> Template {
    Template::new("Vendor Template")
        .with_rule("externalId", Constraint::Unique)
        .with_rule("externalId", Constraint::MaxLength { limit: 100 })
        .with_rule("entityId", Constraint::Unique)
        .with_rule("entityId", Constraint::MaxLength { limit: 80 })
        .with_rule("companyName", Constraint::NotNull)
        .with_rule("companyName", Constraint::MaxLength { limit: 83 })
        .with_rule("email", Constraint::EmailFormat)
        .with_rule(
            "phone",
            Constraint::PhoneFormat {
                default_region: "US".to_string(),
            },
        )
        .with_rule("subsidiary", Constraint::SubsidiaryHierarchy)
        .with_rule("country", Constraint::NotNull)
        .with_rule("country", Constraint::CountryEnum)
        .with_rule("terms", Constraint::TermsEnum)
        .with_rule("currency", Constraint::CurrencyEnum)
}
