//! Export analysis results to JSON.
//!
//! The export pairs each submitted record with its result so downstream
//! scripts never have to re-join inputs and outputs. Submissions are still
//! not persisted anywhere by the tool itself; an export happens only when
//! explicitly requested.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AnalysisResult, EmployeeRecord};
use crate::error::AppError;

/// One record together with its analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub record: EmployeeRecord,
    pub result: AnalysisResult,
}

/// The export file schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub analyses: Vec<AnalysisRow>,
}

/// Write an analysis export JSON file.
pub fn write_export_json(path: &Path, rows: Vec<AnalysisRow>) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create export JSON '{}': {e}", path.display()))
    })?;

    let export = ExportFile {
        tool: "retain".to_string(),
        generated_at: Utc::now(),
        analyses: rows,
    };

    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| AppError::new(2, format!("Failed to write export JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::test_record;
    use crate::domain::{Recommendation, ValueCategory};
    use std::fs;

    #[test]
    fn export_round_trips() {
        let path = std::env::temp_dir().join(format!(
            "retention-advisor-export-{}.json",
            std::process::id()
        ));

        let rows = vec![AnalysisRow {
            record: test_record(),
            result: AnalysisResult {
                risk_probability: 0.1,
                is_flight_risk: false,
                eltv: 42_000.0,
                value_category: ValueCategory::StandardValue,
                recommendation: Recommendation::StableAndGrowing,
            },
        }];
        write_export_json(&path, rows).unwrap();

        let file = File::open(&path).unwrap();
        let export: ExportFile = serde_json::from_reader(file).unwrap();
        assert_eq!(export.tool, "retain");
        assert_eq!(export.analyses.len(), 1);
        assert_eq!(
            export.analyses[0].result.recommendation,
            Recommendation::StableAndGrowing
        );

        let _ = fs::remove_file(path);
    }
}
