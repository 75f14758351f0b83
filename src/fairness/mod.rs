//! Group fairness-burden table
//!
//! Tabular view of group-level burden scores produced upstream: one row
//! per model, and for each demographic group a central burden value
//! plus lower/upper confidence bounds, in columns named by convention
//! (`"Group burden {group}"`, `"... lower bound"`, `"... upper bound"`).
//! Columns are typed and validated at construction; a lookup on an
//! absent column fails with a named error instead of a generic panic.

use crate::error::{FairsightError, Result};
use serde::{Deserialize, Serialize};

/// Column name carrying a group's central burden value
pub fn burden_column(group: &str) -> String {
    format!("Group burden {}", group)
}

/// Column name carrying a group's lower confidence bound
pub fn lower_bound_column(group: &str) -> String {
    format!("Group burden {} lower bound", group)
}

/// Column name carrying a group's upper confidence bound
pub fn upper_bound_column(group: &str) -> String {
    format!("Group burden {} upper bound", group)
}

/// Row-per-model table of group burden scores with confidence bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupBurdenTable {
    /// Row labels, typically model names
    labels: Vec<String>,
    /// Named numeric columns, one value per row
    columns: Vec<BurdenColumn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BurdenColumn {
    name: String,
    values: Vec<f64>,
}

impl GroupBurdenTable {
    /// Create an empty table with the given row labels
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            columns: Vec::new(),
        }
    }

    /// Add a named column; its length must match the row count
    pub fn with_column(mut self, name: &str, values: Vec<f64>) -> Result<Self> {
        if values.len() != self.labels.len() {
            return Err(FairsightError::ColumnLength {
                column: name.to_string(),
                expected: self.labels.len(),
                actual: values.len(),
            });
        }
        self.columns.push(BurdenColumn {
            name: name.to_string(),
            values,
        });
        Ok(self)
    }

    /// Build a table from row labels and (name, values) column pairs
    pub fn from_columns(labels: Vec<String>, columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let mut table = Self::new(labels);
        for (name, values) in columns {
            table = table.with_column(&name, values)?;
        }
        Ok(table)
    }

    /// Number of rows (models)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row labels in table order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether a column with this exact name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Values of a named column
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| FairsightError::MissingColumn(name.to_string()))
    }

    /// Resolve a group's central/lower/upper column triple
    pub fn burden_series(&self, group: &str) -> Result<BurdenSeries> {
        let central = self.column(&burden_column(group))?;
        let lower = self.column(&lower_bound_column(group))?;
        let upper = self.column(&upper_bound_column(group))?;
        Ok(BurdenSeries {
            group: group.to_string(),
            central: central.to_vec(),
            lower: lower.to_vec(),
            upper: upper.to_vec(),
        })
    }
}

/// One group's burden values across all table rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurdenSeries {
    /// Group category this series belongs to
    pub group: String,
    /// Central burden value per row
    pub central: Vec<f64>,
    /// Lower confidence bound per row
    pub lower: Vec<f64>,
    /// Upper confidence bound per row
    pub upper: Vec<f64>,
}

impl BurdenSeries {
    /// Downward error magnitudes, `central - lower` per row.
    ///
    /// Non-negative whenever the central value lies within its bounds;
    /// a negative magnitude indicates malformed upstream input.
    pub fn lower_errors(&self) -> Vec<f64> {
        self.central
            .iter()
            .zip(self.lower.iter())
            .map(|(c, l)| c - l)
            .collect()
    }

    /// Upward error magnitudes, `upper - central` per row
    pub fn upper_errors(&self) -> Vec<f64> {
        self.upper
            .iter()
            .zip(self.central.iter())
            .map(|(u, c)| u - c)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_group_table() -> GroupBurdenTable {
        GroupBurdenTable::new(vec!["gbm".to_string(), "logit".to_string()])
            .with_column("Group burden male", vec![0.30, 0.45])
            .unwrap()
            .with_column("Group burden male lower bound", vec![0.25, 0.40])
            .unwrap()
            .with_column("Group burden male upper bound", vec![0.38, 0.52])
            .unwrap()
            .with_column("Group burden female", vec![0.50, 0.41])
            .unwrap()
            .with_column("Group burden female lower bound", vec![0.44, 0.35])
            .unwrap()
            .with_column("Group burden female upper bound", vec![0.59, 0.49])
            .unwrap()
    }

    #[test]
    fn test_column_name_convention() {
        assert_eq!(burden_column("male"), "Group burden male");
        assert_eq!(lower_bound_column("male"), "Group burden male lower bound");
        assert_eq!(upper_bound_column("male"), "Group burden male upper bound");
    }

    #[test]
    fn test_column_length_mismatch() {
        let err = GroupBurdenTable::new(vec!["gbm".to_string(), "logit".to_string()])
            .with_column("Group burden male", vec![0.3])
            .unwrap_err();
        assert!(matches!(err, FairsightError::ColumnLength { .. }));
    }

    #[test]
    fn test_missing_column() {
        let table = two_group_table();
        let err = table.column("Group burden other").unwrap_err();
        assert!(matches!(err, FairsightError::MissingColumn(_)));
    }

    #[test]
    fn test_burden_series_lookup() {
        let table = two_group_table();
        let series = table.burden_series("female").unwrap();
        assert_eq!(series.central, vec![0.50, 0.41]);
        assert_eq!(series.lower, vec![0.44, 0.35]);
        assert_eq!(series.upper, vec![0.59, 0.49]);
    }

    #[test]
    fn test_burden_series_missing_bound_column() {
        let table = GroupBurdenTable::new(vec!["gbm".to_string()])
            .with_column("Group burden male", vec![0.3])
            .unwrap();
        let err = table.burden_series("male").unwrap_err();
        assert!(matches!(err, FairsightError::MissingColumn(_)));
    }

    #[test]
    fn test_error_magnitudes_non_negative_for_valid_bounds() {
        let table = two_group_table();
        for group in ["male", "female"] {
            let series = table.burden_series(group).unwrap();
            for err in series
                .lower_errors()
                .iter()
                .chain(series.upper_errors().iter())
            {
                assert!(*err >= 0.0, "error magnitude should be non-negative");
            }
        }
    }

    #[test]
    fn test_asymmetric_error_magnitudes() {
        let table = GroupBurdenTable::new(vec!["gbm".to_string()])
            .with_column("Group burden male", vec![0.40])
            .unwrap()
            .with_column("Group burden male lower bound", vec![0.35])
            .unwrap()
            .with_column("Group burden male upper bound", vec![0.55])
            .unwrap();
        let series = table.burden_series("male").unwrap();
        assert!((series.lower_errors()[0] - 0.05).abs() < 1e-12);
        assert!((series.upper_errors()[0] - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_from_columns() {
        let table = GroupBurdenTable::from_columns(
            vec!["gbm".to_string()],
            vec![("Group burden male".to_string(), vec![0.3])],
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.has_column("Group burden male"));
    }

    #[test]
    fn test_labels_preserved() {
        let table = two_group_table();
        assert_eq!(table.labels(), &["gbm".to_string(), "logit".to_string()]);
    }
}
