//! XLSX ingestion via calamine.
//!
//! The first row of the selected sheet is the header; every other cell is
//! rendered to text and blank cells become missing, matching the CSV path.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use tis_model::{Column, Table};
use tracing::debug;

use crate::error::{IngestError, Result};

fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        other => {
            let text = other.to_string();
            if text.is_empty() { None } else { Some(text) }
        }
    }
}

/// Read one sheet of an XLSX workbook into a [`Table`].
///
/// When `sheet` is `None`, the first sheet in the workbook is used.
pub fn read_xlsx_table(path: &Path, sheet: Option<&str>) -> Result<Table> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| IngestError::WorkbookRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: "<first>".to_string(),
            })?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::SheetNotFound {
            path: path.to_path_buf(),
            sheet: format!("{sheet_name}: {e}"),
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (idx, column_cells) in cells.iter_mut().enumerate() {
            let cell = row.get(idx).and_then(cell_to_text);
            column_cells.push(cell);
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();
    let table = Table::from_columns(columns)?;
    debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = table.height(),
        columns = table.width(),
        "workbook sheet loaded"
    );
    Ok(table)
}
