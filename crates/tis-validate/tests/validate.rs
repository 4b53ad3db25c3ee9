//! End-to-end validation scenarios against the built-in templates.

use tis_model::{Column, ColumnMapping, ConstraintKind, Table};
use tis_validate::{Engine, TemplateRegistry, ValidateError};

fn customer_table(columns: Vec<Column>) -> Table {
    Table::from_columns(columns).expect("well-formed table")
}

#[test]
fn duplicate_external_id_flags_second_occurrence_only() {
    let registry = TemplateRegistry::builtin();
    let engine = Engine::new(&registry);
    let table = customer_table(vec![Column::from_text(
        "externalId",
        &["A1", "A2", "A1"],
    )]);

    let report = engine.validate_named(&table, "Customer Template").unwrap();
    assert_eq!(report.violation_count(), 1);
    let violation = &report.violations[0];
    assert_eq!(violation.field, "externalId");
    assert_eq!(violation.kind, ConstraintKind::Unique);
    assert_eq!(violation.rows, vec![2]);
    assert_eq!(violation.values, vec![Some("A1".to_string())]);
}

#[test]
fn clean_customer_dataset_passes() {
    let registry = TemplateRegistry::builtin();
    let engine = Engine::new(&registry);
    let table = customer_table(vec![
        Column::from_text("externalId", &["A1", "A2"]),
        Column::from_text("isPerson", &["TRUE", "FALSE"]),
        Column::from_text("firstName", &["Ada", ""]),
        Column::from_text("lastName", &["Lovelace", ""]),
        Column::from_text("companyName", &["", "Acme Ltd"]),
        Column::from_text("email", &["ada@example.com", "sales@acme.com"]),
        Column::from_text("phone", &["+1 555 123 4567", "0201234567"]),
        Column::from_text("subsidiary", &["Parent:Child", "Parent:Child|Other:Branch"]),
        Column::from_text("country", &["United Kingdom", "Canada"]),
    ]);

    let report = engine.validate_named(&table, "Customer Template").unwrap();
    assert!(report.is_clean(), "unexpected violations: {report:?}");
}

#[test]
fn conditional_required_last_name() {
    let registry = TemplateRegistry::builtin();
    let engine = Engine::new(&registry);
    let table = customer_table(vec![
        Column::from_text("isPerson", &["TRUE", "FALSE"]),
        Column::from_text("lastName", &["", ""]),
    ]);

    let report = engine.validate_named(&table, "Customer Template").unwrap();
    let conditional: Vec<_> = report
        .violations
        .iter()
        .filter(|v| v.kind == ConstraintKind::ConditionalRequired)
        .collect();
    assert_eq!(conditional.len(), 1);
    assert_eq!(conditional[0].field, "lastName");
    assert_eq!(conditional[0].rows, vec![0]);
}

#[test]
fn null_country_reported_once_by_not_null_only() {
    let registry = TemplateRegistry::builtin();
    let engine = Engine::new(&registry);
    let table = customer_table(vec![Column::from_text(
        "country",
        &["Canada", "", "Canadaa"],
    )]);

    let report = engine.validate_named(&table, "Customer Template").unwrap();
    assert_eq!(report.violation_count(), 2);

    let not_null = report
        .violations
        .iter()
        .find(|v| v.kind == ConstraintKind::NotNull)
        .unwrap();
    assert_eq!(not_null.rows, vec![1]);

    let country = report
        .violations
        .iter()
        .find(|v| v.kind == ConstraintKind::CountryEnum)
        .unwrap();
    assert_eq!(country.rows, vec![2]);
    assert_eq!(country.values, vec![Some("Canadaa".to_string())]);
}

#[test]
fn vendor_terms_and_currency_membership() {
    let registry = TemplateRegistry::builtin();
    let engine = Engine::new(&registry);
    let table = customer_table(vec![
        Column::from_text("terms", &["Net 30", "Whenever"]),
        Column::from_text("currency", &["USD", "Doubloons"]),
    ]);

    let report = engine.validate_named(&table, "Vendor Template").unwrap();
    let kinds: Vec<ConstraintKind> = report.violations.iter().map(|v| v.kind).collect();
    assert_eq!(
        kinds,
        vec![ConstraintKind::TermsEnum, ConstraintKind::CurrencyEnum]
    );
    assert_eq!(report.violations[0].rows, vec![1]);
    assert_eq!(report.violations[1].rows, vec![1]);
}

#[test]
fn subsidiary_path_rejections() {
    let registry = TemplateRegistry::builtin();
    let engine = Engine::new(&registry);
    let table = customer_table(vec![Column::from_text(
        "subsidiary",
        &["Parent:Child", "Parent::Child", "Parent:Child|", ""],
    )]);

    let report = engine.validate_named(&table, "Customer Template").unwrap();
    assert_eq!(report.violation_count(), 1);
    let violation = &report.violations[0];
    assert_eq!(violation.kind, ConstraintKind::SubsidiaryHierarchy);
    assert_eq!(violation.rows, vec![1, 2, 3]);
}

#[test]
fn unknown_template_name_fails() {
    let registry = TemplateRegistry::builtin();
    let engine = Engine::new(&registry);
    let table = Table::new();
    let error = engine
        .validate_named(&table, "No Such Template")
        .unwrap_err();
    assert!(matches!(error, ValidateError::UnknownTemplate(name) if name == "No Such Template"));
}

#[test]
fn mapped_table_validates_against_source_rows() {
    // Map a raw upload onto the template, then validate the mapped table.
    let source = Table::from_columns(vec![
        Column::from_text("External Reference", &["A1", "A2", "A1"]),
        Column::from_text("Contact Email", &["a@b.com", "broken", "c@d.com"]),
    ])
    .unwrap();

    let mut mapping = ColumnMapping::new();
    mapping.bind("externalId", "External Reference").unwrap();
    mapping.bind("email", "Contact Email").unwrap();
    let mapped = mapping.apply(&source).unwrap();

    let registry = TemplateRegistry::builtin();
    let engine = Engine::new(&registry);
    let report = engine.validate_named(&mapped, "Customer Template").unwrap();

    let unique = report
        .violations
        .iter()
        .find(|v| v.kind == ConstraintKind::Unique)
        .unwrap();
    assert_eq!(unique.rows, vec![2]);

    let email = report
        .violations
        .iter()
        .find(|v| v.kind == ConstraintKind::EmailFormat)
        .unwrap();
    assert_eq!(email.rows, vec![1]);
    assert_eq!(email.values, vec![Some("broken".to_string())]);
}
