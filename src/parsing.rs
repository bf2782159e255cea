//! File parsing functionality for the employee training dataset
//!
//! This module handles loading the CSV file and reducing each row to the
//! attendance indicator and the performance score.

use crate::analysis::constants::{ATTENDANCE_COLUMN, SCORE_COLUMN};
use crate::common::{Dataset, Observation};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Cell contents that count as a missing value
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column '{0}' is missing from the dataset header")]
    MissingColumn(&'static str),

    #[error("Invalid performance score '{value}' on line {line}")]
    InvalidScore { line: u64, value: String },
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Raw row as it appears in the file; other columns are ignored
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "TrainingAttended")]
    attendance: Option<String>,
    #[serde(rename = "PerformanceScore")]
    score: Option<String>,
}

/// Load the employee training dataset from a CSV file
///
/// # Arguments
/// * `file_path` - Path to the CSV file
///
/// # Returns
/// * `Ok(Dataset)` - Every row of the file, with missing cells as `None`
/// * `Err(ParsingError)` - If the file could not be read or is malformed
pub fn load_dataset(file_path: &Path) -> Result<Dataset> {
    let file = File::open(file_path)?;
    Dataset::from_reader(file)
}

impl Dataset {
    /// Parse a dataset from any CSV source with a header row
    ///
    /// Both required columns must be present in the header. A score that is
    /// neither missing nor a finite number aborts parsing.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        for column in [ATTENDANCE_COLUMN, SCORE_COLUMN] {
            if !headers.iter().any(|header| header == column) {
                return Err(ParsingError::MissingColumn(column));
            }
        }

        let mut observations = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |position| position.line());
            let raw: RawRow = record.deserialize(Some(&headers))?;
            observations.push(Observation {
                attendance: raw.attendance.filter(|value| !is_missing(value)),
                score: parse_score(raw.score, line)?,
            });
        }

        Ok(Dataset { observations })
    }
}

/// Exact match: surrounding whitespace makes a cell a regular value
fn is_missing(value: &str) -> bool {
    MISSING_MARKERS.contains(&value)
}

fn parse_score(value: Option<String>, line: u64) -> Result<Option<f64>> {
    let Some(value) = value.filter(|value| !is_missing(value.trim())) else {
        return Ok(None);
    };

    match value.trim().parse::<f64>() {
        Ok(score) if score.is_finite() => Ok(Some(score)),
        _ => Err(ParsingError::InvalidScore { line, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_required_columns_and_ignores_others() {
        let csv = "EmployeeID,TrainingAttended,Department,PerformanceScore\n\
                   1,Yes,Sales,81.5\n\
                   2,No,IT,70\n";

        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(
            dataset.observations,
            vec![
                Observation {
                    attendance: Some("Yes".to_string()),
                    score: Some(81.5)
                },
                Observation {
                    attendance: Some("No".to_string()),
                    score: Some(70.0)
                },
            ]
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::na("NA")]
    #[case::nan("NaN")]
    #[case::null("null")]
    #[case::none("None")]
    fn treats_markers_as_missing(#[case] marker: &str) {
        let csv = format!("TrainingAttended,PerformanceScore\n{marker},{marker}\nYes,1\n");

        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.observations[0].attendance, None);
        assert_eq!(dataset.observations[0].score, None);
        assert_eq!(dataset.drop_missing().len(), 1);
    }

    #[test]
    fn whitespace_attendance_is_a_category_but_whitespace_score_is_missing() {
        let csv = "TrainingAttended,PerformanceScore\n  ,81\nYes,  \nNo, 70 \n";

        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();

        assert_eq!(dataset.observations[0].attendance.as_deref(), Some("  "));
        assert_eq!(dataset.observations[0].score, Some(81.0));
        assert_eq!(dataset.observations[1].score, None);
        assert_eq!(dataset.observations[2].score, Some(70.0));

        let rows = dataset.drop_missing();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].attendance, "  ");
    }

    #[rstest]
    #[case::attendance("PerformanceScore\n1\n", ATTENDANCE_COLUMN)]
    #[case::score("TrainingAttended\nYes\n", SCORE_COLUMN)]
    fn rejects_missing_column(#[case] csv: &str, #[case] expected: &str) {
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ParsingError::MissingColumn(column) if column == expected));
    }

    #[test]
    fn rejects_non_numeric_score() {
        let csv = "TrainingAttended,PerformanceScore\nYes,80\nNo,excellent\n";

        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();

        match err {
            ParsingError::InvalidScore { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "excellent");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        let csv = "TrainingAttended,PerformanceScore\nYes,80,extra\n";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ParsingError::Csv(_)));
    }

    #[test]
    fn load_dataset_reads_file_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "TrainingAttended,PerformanceScore").unwrap();
        writeln!(file, "Yes,90").unwrap();
        writeln!(file, "No,").unwrap();

        let dataset = load_dataset(file.path()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.drop_missing().len(), 1);
    }

    #[test]
    fn load_dataset_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dataset(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, ParsingError::FileRead(_)));
    }
}
