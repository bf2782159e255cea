use crate::analysis::constants::{TRAINED_LABEL, UNTRAINED_LABEL};

/// A single dataset row reduced to the two fields the analysis needs
///
/// Either field may be missing in the input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Training attendance indicator, expected to be `Yes` or `No`
    pub attendance: Option<String>,
    /// Performance score
    pub score: Option<f64>,
}

/// A row that survived cleaning; both required fields are present
#[derive(Debug, Clone, PartialEq)]
pub struct CleanObservation {
    pub attendance: String,
    pub score: f64,
}

/// The loaded table, in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub observations: Vec<Observation>,
}

impl Dataset {
    /// Number of rows read from the input file
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Drops every row missing the attendance indicator or the score
    ///
    /// Row order is preserved. An empty result is allowed here; the
    /// sample-size guard in the evaluator rejects it later.
    pub fn drop_missing(self) -> Vec<CleanObservation> {
        self.observations
            .into_iter()
            .filter_map(|row| match (row.attendance, row.score) {
                (Some(attendance), Some(score)) => Some(CleanObservation { attendance, score }),
                _ => None,
            })
            .collect()
    }
}

/// Scores split by training attendance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Groups {
    /// Scores of rows whose attendance is exactly `Yes`
    pub trained: Vec<f64>,
    /// Scores of rows whose attendance is exactly `No`
    pub untrained: Vec<f64>,
    /// Rows whose attendance matched neither label
    pub unmatched: usize,
}

impl Groups {
    /// Splits cleaned rows by exact, case-sensitive match on the attendance label
    ///
    /// Values such as `yes`, `Y` or `1` fall into neither group and are only
    /// counted in [`Groups::unmatched`].
    pub fn partition(rows: &[CleanObservation]) -> Self {
        let mut groups = Groups::default();
        for row in rows {
            match row.attendance.as_str() {
                TRAINED_LABEL => groups.trained.push(row.score),
                UNTRAINED_LABEL => groups.untrained.push(row.score),
                _ => groups.unmatched += 1,
            }
        }

        groups
    }
}
