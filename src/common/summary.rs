//! ASCII table formatting for group summaries
//!
//! Converts [`GroupSummary`] values into rows for the [`tabled`] crate.

use crate::analysis::GroupSummary;
use tabled::{Table, Tabled};

/// A single table row with pre-formatted numbers
#[derive(Debug, Clone, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Group")]
    pub group: String,
    #[tabled(rename = "Count")]
    pub count: usize,
    #[tabled(rename = "Mean")]
    pub mean: String,
    #[tabled(rename = "Std Dev")]
    pub std_dev: String,
    #[tabled(rename = "Min")]
    pub min: String,
    #[tabled(rename = "Median")]
    pub median: String,
    #[tabled(rename = "Max")]
    pub max: String,
}

impl From<&GroupSummary> for SummaryRow {
    fn from(summary: &GroupSummary) -> Self {
        Self {
            group: summary.label.clone(),
            count: summary.count,
            mean: format!("{:.2}", summary.mean),
            std_dev: format!("{:.2}", summary.std_dev),
            min: format!("{:.2}", summary.min),
            median: format!("{:.2}", summary.median),
            max: format!("{:.2}", summary.max),
        }
    }
}

/// Formats group summaries as an ASCII table
///
/// # Arguments
/// * `summaries` - One entry per group, in display order
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_summary_table(summaries: &[GroupSummary]) -> String {
    if summaries.is_empty() {
        return "No groups to summarize".to_string();
    }

    let rows: Vec<SummaryRow> = summaries.iter().map(SummaryRow::from).collect();
    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_row_rounds_to_two_decimals() {
        let summary = GroupSummary::new("Yes", &[1.0, 2.0, 4.0]).unwrap();
        let row = SummaryRow::from(&summary);

        assert_eq!(row.group, "Yes");
        assert_eq!(row.count, 3);
        assert_eq!(row.mean, "2.33");
        assert_eq!(row.min, "1.00");
        assert_eq!(row.median, "2.00");
        assert_eq!(row.max, "4.00");
    }

    #[test]
    fn test_format_summary_table() {
        let summaries = vec![
            GroupSummary::new("Yes", &[80.0, 90.0]).unwrap(),
            GroupSummary::new("No", &[60.0, 70.0, 65.0]).unwrap(),
        ];

        let table = format_summary_table(&summaries);
        assert!(table.contains("Group"));
        assert!(table.contains("Count"));
        assert!(table.contains("Mean"));
        assert!(table.contains("Yes"));
        assert!(table.contains("85.00"));
        assert!(table.contains("65.00"));

        assert_eq!(format_summary_table(&[]), "No groups to summarize");
    }
}
