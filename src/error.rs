use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Domain faults
// ---------------------------------------------------------------------------

/// The two ways the dashboard can fail.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The dataset could not be read or did not form a valid table.
    /// Fatal: the window is never opened.
    #[error("dataset unavailable at {}", .path.display())]
    DatasetUnavailable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A selection named a column that is not in the table.
    #[error("column not found: '{0}'")]
    InvalidSelection(String),
}
