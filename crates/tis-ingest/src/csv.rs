//! CSV ingestion and export.
//!
//! Every cell comes in as string-or-missing: blank fields become missing
//! cells and no type inference happens, so validators always see the raw
//! text. UTF-8 BOMs are stripped; UTF-16 files are rejected up front.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tis_model::{Column, Table};
use tracing::debug;

use crate::error::{IngestError, Result};

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Reject UTF-16 input by BOM sniffing. A UTF-8 BOM is acceptable.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = open_file(path)?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Read a CSV file into a [`Table`]. The first record is the header row.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    validate_encoding(path)?;
    let mut text = String::new();
    open_file(path)?
        .read_to_string(&mut text)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        for (idx, column_cells) in cells.iter_mut().enumerate() {
            let cell = record.get(idx).unwrap_or("");
            if cell.is_empty() {
                column_cells.push(None);
            } else {
                column_cells.push(Some(cell.to_string()));
            }
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
        rows = table.height(),
        columns = table.width(),
        "csv loaded"
    );
    Ok(table)
}

/// Write a [`Table`] as CSV. Missing cells serialize as empty fields.
pub fn write_csv_table(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| IngestError::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let header: Vec<&str> = table.column_names().collect();
    writer.write_record(&header).map_err(|e| IngestError::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    for row in 0..table.height() {
        let record: Vec<&str> = table
            .columns()
            .iter()
            .map(|column| column.get(row).unwrap_or(""))
            .collect();
        writer.write_record(&record).map_err(|e| IngestError::Export {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    }

    writer.flush().map_err(|e| IngestError::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn reads_blank_cells_as_missing() {
        let file = create_temp_csv("externalId,email\nA1,a@b.co\nA2,\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.column("email").unwrap().get(0), Some("a@b.co"));
        assert_eq!(table.column("email").unwrap().get(1), None);
    }

    #[test]
    fn strips_utf8_bom() {
        let file = create_temp_csv("\u{feff}A,B\n1,2\n");
        let table = read_csv_table(file.path()).unwrap();
        let names: Vec<&str> = table.column_names().collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn rejects_utf16() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, 0x41, 0x00]).unwrap();
        let result = read_csv_table(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding { .. })
        ));
    }

    #[test]
    fn short_records_pad_with_missing() {
        let file = create_temp_csv("A,B,C\n1,2\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.column("C").unwrap().get(0), None);
    }

    #[test]
    fn round_trips_through_export() {
        let file = create_temp_csv("id,name\n1,Ada\n2,\n");
        let table = read_csv_table(file.path()).unwrap();

        let out = NamedTempFile::new().unwrap();
        write_csv_table(&table, out.path()).unwrap();
        let round = read_csv_table(out.path()).unwrap();
        assert_eq!(round, table);
    }
}
