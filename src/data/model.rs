use std::fmt;

use anyhow::{bail, Result};

use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Diagnosis – the two-valued label column
// ---------------------------------------------------------------------------

/// Display names indexed by label code. Positional: code 0 is the first entry.
pub const CLASS_LABELS: [&str; 2] = ["Benign", "Malignant"];

/// Diagnosis label of a single row.
///
/// The numeric code is the table's own encoding; the loader re-encodes sources
/// that document a different class order so this mapping always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Diagnosis {
    Benign,
    Malignant,
}

impl Diagnosis {
    /// Both categories in code order.
    pub const ALL: [Diagnosis; 2] = [Diagnosis::Benign, Diagnosis::Malignant];

    pub fn code(self) -> u8 {
        match self {
            Diagnosis::Benign => 0,
            Diagnosis::Malignant => 1,
        }
    }

    /// Human-readable name, looked up positionally from the code.
    pub fn display_name(self) -> &'static str {
        CLASS_LABELS[self.code() as usize]
    }

    /// Parse a textual diagnosis (`B`, `M`, `benign`, `malignant`, any case).
    pub fn parse_text(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "benign" => Some(Diagnosis::Benign),
            "m" | "malignant" => Some(Diagnosis::Malignant),
            _ => None,
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ---------------------------------------------------------------------------
// FeatureColumn – one named numeric column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FeatureColumn {
    pub name: String,
    pub values: Vec<f64>,
}

impl FeatureColumn {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

// ---------------------------------------------------------------------------
// FeatureTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Immutable table of numeric feature columns plus the diagnosis label.
///
/// Fields are private so the equal-length invariant established in
/// [`FeatureTable::new`] cannot be broken afterwards.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    columns: Vec<FeatureColumn>,
    labels: Vec<Diagnosis>,
}

impl FeatureTable {
    /// Build a table, checking that every column has one value per label.
    pub fn new(columns: Vec<FeatureColumn>, labels: Vec<Diagnosis>) -> Result<Self> {
        for col in &columns {
            if col.values.len() != labels.len() {
                bail!(
                    "column '{}' has {} values but the label column has {}",
                    col.name,
                    col.values.len(),
                    labels.len()
                );
            }
        }
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == col.name) {
                bail!("duplicate column name '{}'", col.name);
            }
        }
        Ok(Self { columns, labels })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Feature names in column order.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn columns(&self) -> &[FeatureColumn] {
        &self.columns
    }

    pub fn labels(&self) -> &[Diagnosis] {
        &self.labels
    }

    /// Values of the named feature column.
    pub fn column(&self, name: &str) -> Result<&[f64], DashboardError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| DashboardError::InvalidSelection(name.to_string()))
    }

    /// Row count per diagnosis, in code order.
    pub fn class_counts(&self) -> [usize; 2] {
        let mut counts = [0usize; 2];
        for label in &self.labels {
            counts[label.code() as usize] += 1;
        }
        counts
    }
}

// ---------------------------------------------------------------------------
// Selection – the user's pair of feature names
// ---------------------------------------------------------------------------

/// Two feature names chosen independently; they may be equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub first: String,
    pub second: String,
}

impl Selection {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Both selectors on the table's first feature, as the widgets start out.
    pub fn initial(table: &FeatureTable) -> Self {
        let first = table.feature_names().next().unwrap_or_default();
        Self::new(first, first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FeatureTable {
        FeatureTable::new(
            vec![
                FeatureColumn::new("mean radius", vec![1.0, 2.0, 3.0]),
                FeatureColumn::new("mean texture", vec![4.0, 5.0, 6.0]),
            ],
            vec![Diagnosis::Benign, Diagnosis::Malignant, Diagnosis::Malignant],
        )
        .unwrap()
    }

    #[test]
    fn label_names_are_positional() {
        let named: Vec<(u8, &str)> = Diagnosis::ALL
            .iter()
            .map(|d| (d.code(), d.display_name()))
            .collect();
        assert_eq!(named, [(0, "Benign"), (1, "Malignant")]);
        assert_eq!(Diagnosis::Malignant.to_string(), "Malignant");
    }

    #[test]
    fn parses_textual_diagnosis() {
        assert_eq!(Diagnosis::parse_text("M"), Some(Diagnosis::Malignant));
        assert_eq!(Diagnosis::parse_text(" benign "), Some(Diagnosis::Benign));
        assert_eq!(Diagnosis::parse_text("unknown"), None);
    }

    #[test]
    fn rejects_ragged_columns() {
        let err = FeatureTable::new(
            vec![FeatureColumn::new("a", vec![1.0])],
            vec![Diagnosis::Benign, Diagnosis::Benign],
        )
        .unwrap_err();
        assert!(err.to_string().contains("column 'a' has 1 values"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = FeatureTable::new(
            vec![
                FeatureColumn::new("a", vec![1.0]),
                FeatureColumn::new("a", vec![2.0]),
            ],
            vec![Diagnosis::Benign],
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_column_is_invalid_selection() {
        let t = table();
        assert_eq!(t.column("mean texture").unwrap(), &[4.0, 5.0, 6.0]);
        match t.column("nope") {
            Err(DashboardError::InvalidSelection(name)) => assert_eq!(name, "nope"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn counts_by_class() {
        assert_eq!(table().class_counts(), [1, 2]);
    }

    #[test]
    fn empty_table_reports_empty() {
        let t = FeatureTable::new(vec![FeatureColumn::new("a", Vec::new())], Vec::new()).unwrap();
        assert!(t.is_empty());
        assert!(!table().is_empty());
    }

    #[test]
    fn initial_selection_uses_first_feature_twice() {
        let sel = Selection::initial(&table());
        assert_eq!(sel, Selection::new("mean radius", "mean radius"));
    }
}
