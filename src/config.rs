use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Optional settings file, looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.json";

/// Environment variable that overrides [`DashboardConfig::dataset_path`].
pub const DATASET_ENV: &str = "BREAST_CANCER_DATA";

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Startup settings. Every field has a default, so an empty `{}` is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Dataset file: scikit-learn `breast_cancer.csv`, `wdbc.data`, CSV or Parquet.
    pub dataset_path: PathBuf,
    pub histogram_bins: usize,
    /// Degrees, counter-clockwise from the +x axis.
    pub pie_start_angle: f64,
    pub map_zoom: f64,
    /// Initial window size in logical pixels.
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/breast_cancer.csv"),
            histogram_bins: 30,
            pie_start_angle: 140.0,
            map_zoom: 3.0,
            window_size: [1200.0, 900.0],
        }
    }
}

impl DashboardConfig {
    /// Resolve the configuration: defaults, then [`CONFIG_FILE`] if present,
    /// then the [`DATASET_ENV`] override. A broken file falls back to defaults.
    pub fn resolve() -> Self {
        let mut config = match Self::from_file(Path::new(CONFIG_FILE)) {
            Ok(Some(config)) => {
                log::info!("Using settings from {CONFIG_FILE}");
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Ignoring {CONFIG_FILE}: {e:#}");
                Self::default()
            }
        };
        config.apply_env_override(std::env::var_os(DATASET_ENV).map(PathBuf::from));
        config
    }

    /// Read a settings file; `Ok(None)` when it does not exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).map(Some)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing settings JSON")
    }

    fn apply_env_override(&mut self, dataset_path: Option<PathBuf>) {
        if let Some(path) = dataset_path {
            log::info!("{DATASET_ENV} overrides dataset path: {}", path.display());
            self.dataset_path = path;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(DashboardConfig::from_json("{}").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = DashboardConfig::from_json(
            r#"{ "dataset_path": "wdbc.data", "histogram_bins": 10 }"#,
        )
        .unwrap();
        assert_eq!(config.dataset_path, PathBuf::from("wdbc.data"));
        assert_eq!(config.histogram_bins, 10);
        assert_eq!(config.pie_start_angle, 140.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(DashboardConfig::from_json(r#"{ "bins": 10 }"#).is_err());
    }

    #[test]
    fn missing_file_is_none() {
        let found = DashboardConfig::from_file(Path::new("no/such/dashboard.json")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn env_override_replaces_dataset_path() {
        let mut config = DashboardConfig::default();
        config.apply_env_override(None);
        assert_eq!(config.dataset_path, PathBuf::from("data/breast_cancer.csv"));
        config.apply_env_override(Some(PathBuf::from("/tmp/sample.parquet")));
        assert_eq!(config.dataset_path, PathBuf::from("/tmp/sample.parquet"));
    }
}
