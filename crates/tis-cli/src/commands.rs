//! Command implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tis_ingest::{read_csv_table, read_xlsx_table, write_csv_table};
use tis_model::{ColumnMapping, Table, ValidationReport};
use tis_transform::{Language, clean_columns, rename_countries};
use tis_validate::{Engine, TemplateRegistry, write_report_json};
use tracing::{info, warn};

use crate::cli::{CleanArgs, LanguageArg, NormalizeCountriesArgs, ValidateArgs};

/// Load a table from CSV or XLSX based on the file extension.
fn load_table(input: &Path, sheet: Option<&str>) -> Result<Table> {
    let extension = input
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    match extension.as_deref() {
        Some("csv") => read_csv_table(input)
            .with_context(|| format!("failed to load {}", input.display())),
        Some("xlsx") => read_xlsx_table(input, sheet)
            .with_context(|| format!("failed to load {}", input.display())),
        _ => bail!("unsupported input type (expected .csv or .xlsx): {}", input.display()),
    }
}

fn load_mapping(path: &Path) -> Result<ColumnMapping> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read mapping {}", path.display()))?;
    let mapping: ColumnMapping = serde_json::from_str(&text)
        .with_context(|| format!("invalid mapping file {}", path.display()))?;
    Ok(mapping)
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let table = load_table(&args.input, args.sheet.as_deref())?;
    info!(
        rows = table.height(),
        columns = table.width(),
        "input loaded"
    );

    let mapped = match &args.mapping {
        Some(mapping_path) => {
            let mapping = load_mapping(mapping_path)?;
            mapping
                .apply(&table)
                .context("failed to apply column mapping")?
        }
        None => table,
    };

    let registry = TemplateRegistry::builtin();
    let engine = Engine::new(&registry);
    let report = engine
        .validate_named(&mapped, &args.template)
        .context("validation failed")?;

    if let Some(report_path) = &args.report {
        let written = write_report_json(report_path, &report)?;
        info!(path = %written.display(), "report written");
    }

    if let Some(export_path) = &args.export {
        if !report.is_clean() {
            warn!(
                violations = report.violation_count(),
                "exporting despite validation violations"
            );
        }
        write_csv_table(&mapped, export_path)
            .with_context(|| format!("failed to export {}", export_path.display()))?;
        info!(path = %export_path.display(), "mapped table exported");
    }

    Ok(report)
}

pub fn run_clean(args: &CleanArgs) -> Result<usize> {
    let table = load_table(&args.input, args.sheet.as_deref())?;
    let columns: Vec<&str> = args.columns.iter().map(String::as_str).collect();
    let language = match args.language {
        LanguageArg::English => Language::English,
        LanguageArg::Arabic => Language::Arabic,
    };

    let (cleaned, changed_rows) =
        clean_columns(&table, &columns, language).context("failed to clean columns")?;
    write_csv_table(&cleaned, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(
        path = %args.output.display(),
        changed_rows = changed_rows.len(),
        "cleaned table written"
    );
    Ok(changed_rows.len())
}

pub fn run_normalize_countries(args: &NormalizeCountriesArgs) -> Result<usize> {
    let table = load_table(&args.input, args.sheet.as_deref())?;
    let (renamed, changed_rows) =
        rename_countries(&table, &args.column).context("failed to normalize countries")?;
    write_csv_table(&renamed, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(
        path = %args.output.display(),
        renamed = changed_rows.len(),
        "normalized table written"
    );
    Ok(changed_rows.len())
}
