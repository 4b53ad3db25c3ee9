//! Machine-readable report output.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use tis_model::ValidationReport;

use crate::error::Result;

const REPORT_SCHEMA: &str = "import-studio.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Versioned envelope for a serialized validation report.
#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    #[serde(flatten)]
    pub report: &'a ValidationReport,
}

impl<'a> ReportPayload<'a> {
    pub fn new(report: &'a ValidationReport) -> Self {
        Self {
            schema: REPORT_SCHEMA,
            schema_version: REPORT_SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            report,
        }
    }
}

/// Write a validation report as pretty-printed JSON.
pub fn write_report_json(output_path: &Path, report: &ValidationReport) -> Result<PathBuf> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let payload = ReportPayload::new(report);
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(output_path, format!("{json}\n"))?;
    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tis_model::{ConstraintKind, Violation};

    #[test]
    fn payload_carries_schema_and_report() {
        let mut report = ValidationReport::new("Customer Template");
        report.add(Violation::from_offenders(
            "externalId",
            ConstraintKind::Unique,
            vec![(2, Some("A1".to_string()))],
            "externalId contains 1 duplicate value(s)",
        ));
        let payload = ReportPayload::new(&report);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["schema"], REPORT_SCHEMA);
        assert_eq!(json["template"], "Customer Template");
        assert_eq!(json["violations"][0]["rows"][0], 2);
    }

    #[test]
    fn writes_json_file_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = ValidationReport::new("Vendor Template");
        let written = write_report_json(&path, &report).unwrap();
        let text = std::fs::read_to_string(written).unwrap();
        assert!(text.ends_with('\n'));
        assert!(text.contains("\"schema_version\": 1"));
    }
}
