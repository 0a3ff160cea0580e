//! Data layer: core types, loading, and the static map markers.
//!
//! Architecture:
//! ```text
//!  breast_cancer.csv / wdbc.data / .parquet
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → FeatureTable (labels re-encoded 0=B, 1=M)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ FeatureTable  │  named f64 columns + Diagnosis labels, read-only
//!   └──────────────┘
//!
//!   ┌──────────┐
//!   │  places   │  TREATMENT_CENTERS, compiled in
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod places;

use std::path::Path;

use crate::error::DashboardError;
use model::FeatureTable;

/// Load the dataset once at startup. Any failure is fatal to the caller.
pub fn load(path: &Path) -> Result<FeatureTable, DashboardError> {
    let table = loader::load_file(path).map_err(|source| DashboardError::DatasetUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    if table.is_empty() {
        log::warn!("{} holds no data rows; every view will be empty", path.display());
    }
    log::info!(
        "Loaded {} rows with {} feature columns from {}",
        table.len(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_dataset_unavailable() {
        let path = Path::new("definitely/not/here/breast_cancer.csv");
        match load(path) {
            Err(DashboardError::DatasetUnavailable { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
