//! Employee record JSON input.
//!
//! The input file holds either one record object or an array of records;
//! both shapes are normalized to a `Vec` here so the pipeline only ever
//! sees slices. Unreadable or incomplete input is a per-request validation
//! error, not a startup failure: the bundle is fine, the submission is not.

use std::fs::File;
use std::path::Path;

use crate::domain::EmployeeRecord;
use crate::error::AppError;

/// Read one record or an array of records from a JSON file.
pub fn read_records(path: &Path) -> Result<Vec<EmployeeRecord>, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::validation(format!("Failed to open record file '{}': {e}", path.display()))
    })?;
    let value: serde_json::Value = serde_json::from_reader(file).map_err(|e| {
        AppError::validation(format!("Invalid record JSON '{}': {e}", path.display()))
    })?;

    let records = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(parse_record)
            .collect::<Result<Vec<_>, _>>()?,
        other => vec![parse_record(other)?],
    };

    if records.is_empty() {
        return Err(AppError::validation(format!(
            "Record file '{}' contains an empty array.",
            path.display()
        )));
    }
    Ok(records)
}

fn parse_record(value: serde_json::Value) -> Result<EmployeeRecord, AppError> {
    serde_json::from_value(value)
        .map_err(|e| AppError::validation(format!("Invalid employee record: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::test_record;
    use std::fs;

    fn write_scratch(tag: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "retention-advisor-record-{tag}-{}.json",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn single_object_and_array_both_parse() {
        let record = test_record();
        let single = write_scratch("single", &serde_json::to_string(&record).unwrap());
        assert_eq!(read_records(&single).unwrap(), vec![record.clone()]);

        let array = write_scratch(
            "array",
            &serde_json::to_string(&vec![record.clone(), record.clone()]).unwrap(),
        );
        assert_eq!(read_records(&array).unwrap().len(), 2);

        let _ = fs::remove_file(single);
        let _ = fs::remove_file(array);
    }

    #[test]
    fn incomplete_record_is_a_validation_error() {
        let mut json = serde_json::to_value(test_record()).unwrap();
        json.as_object_mut().unwrap().remove("Age");
        let path = write_scratch("incomplete", &json.to_string());

        let err = read_records(&path).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Age"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_a_validation_error() {
        let err = read_records(Path::new("/nonexistent/records.json")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn empty_array_is_rejected() {
        let path = write_scratch("empty", "[]");
        assert!(read_records(&path).unwrap_err().is_validation());
        let _ = fs::remove_file(path);
    }
}
