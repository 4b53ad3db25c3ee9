//! Terminal rendering of validation reports and template listings.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use tis_model::{Template, ValidationReport, Violation};

const EXAMPLE_VALUES: usize = 5;
const EXAMPLE_ROWS: usize = 10;

pub fn print_report(report: &ValidationReport) {
    println!("Template: {}", report.template_name);
    if report.is_clean() {
        println!("No violations found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Constraint"),
        header_cell("Rows"),
        header_cell("Examples"),
        header_cell("Message"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for violation in &report.violations {
        table.add_row(vec![
            Cell::new(&violation.field).add_attribute(Attribute::Bold),
            Cell::new(violation.kind.as_str()).fg(Color::Red),
            Cell::new(violation.row_count()),
            Cell::new(example_text(violation)),
            Cell::new(&violation.message),
        ]);
    }
    println!("{table}");
    println!(
        "{} violation(s) across {} row(s).",
        report.violation_count(),
        report.offending_row_count()
    );
}

pub fn print_templates(templates: &[&Template]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Template"),
        header_cell("Field"),
        header_cell("Constraint"),
    ]);
    apply_listing_table_style(&mut table);
    for template in templates {
        for rule in &template.rules {
            table.add_row(vec![
                Cell::new(&template.name),
                Cell::new(&rule.field),
                Cell::new(rule.constraint.kind().as_str()),
            ]);
        }
    }
    println!("{table}");
}

/// Render a capped sample of offending rows and values for one violation.
fn example_text(violation: &Violation) -> String {
    let values: Vec<String> = violation
        .values
        .iter()
        .filter_map(|value| value.as_deref())
        .take(EXAMPLE_VALUES)
        .map(|value| format!("\"{value}\""))
        .collect();
    let rows: Vec<String> = violation
        .rows
        .iter()
        .take(EXAMPLE_ROWS)
        .map(ToString::to_string)
        .collect();
    let mut parts = Vec::new();
    if !rows.is_empty() {
        let suffix = if violation.rows.len() > EXAMPLE_ROWS {
            ", ..."
        } else {
            ""
        };
        parts.push(format!("rows {}{suffix}", rows.join(", ")));
    }
    if !values.is_empty() {
        let suffix = if violation.values.len() > EXAMPLE_VALUES {
            ", ..."
        } else {
            ""
        };
        parts.push(format!("values {}{suffix}", values.join(", ")));
    }
    parts.join("; ")
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(20)),
            ColumnConstraint::UpperBoundary(Width::Fixed(22)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn apply_listing_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tis_model::ConstraintKind;

    #[test]
    fn example_text_caps_values() {
        let offenders: Vec<(usize, Option<String>)> = (0..12)
            .map(|row| (row, Some(format!("v{row}"))))
            .collect();
        let violation = Violation::from_offenders(
            "email",
            ConstraintKind::EmailFormat,
            offenders,
            "bad email",
        );
        let text = example_text(&violation);
        assert!(text.contains("rows 0, 1,"));
        assert!(text.contains("..."));
        assert!(text.contains("\"v0\""));
        assert!(!text.contains("\"v6\""));
    }

    #[test]
    fn example_text_skips_missing_values() {
        let violation = Violation::from_offenders(
            "country",
            ConstraintKind::NotNull,
            vec![(3, None)],
            "missing country",
        );
        let text = example_text(&violation);
        assert_eq!(text, "rows 3");
    }
}
