use crate::data::model::{FeatureTable, Selection};
use crate::error::DashboardError;
use crate::views::{self, RenderOptions, RenderedView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset loaded at startup; never modified.
    pub table: FeatureTable,

    /// Current pair of selected features.
    pub selection: Selection,

    /// Fixed drawing parameters from the config.
    pub options: RenderOptions,
}

impl AppState {
    pub fn new(table: FeatureTable, options: RenderOptions) -> Self {
        let selection = Selection::initial(&table);
        Self {
            table,
            selection,
            options,
        }
    }

    /// Feature names offered by both selectors.
    pub fn feature_names(&self) -> Vec<String> {
        self.table.feature_names().map(str::to_string).collect()
    }

    pub fn select_first(&mut self, name: &str) {
        if self.selection.first != name {
            log::debug!("First feature: {name}");
            self.selection.first = name.to_string();
        }
    }

    pub fn select_second(&mut self, name: &str) {
        if self.selection.second != name {
            log::debug!("Second feature: {name}");
            self.selection.second = name.to_string();
        }
    }

    /// Run a full render pass over the current selection.
    pub fn render(&self) -> Result<Vec<RenderedView>, DashboardError> {
        views::render(&self.table, &self.selection, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Diagnosis, FeatureColumn};

    fn state() -> AppState {
        let table = FeatureTable::new(
            vec![
                FeatureColumn::new("mean radius", vec![1.0, 2.0]),
                FeatureColumn::new("mean texture", vec![3.0, 4.0]),
            ],
            vec![Diagnosis::Benign, Diagnosis::Malignant],
        )
        .unwrap();
        AppState::new(table, RenderOptions::default())
    }

    #[test]
    fn selectors_start_on_first_feature() {
        let s = state();
        assert_eq!(s.selection, Selection::new("mean radius", "mean radius"));
        assert_eq!(s.feature_names(), ["mean radius", "mean texture"]);
    }

    #[test]
    fn each_selection_change_rerenders_everything() {
        let mut s = state();
        s.select_second("mean texture");
        let views = s.render().unwrap();
        assert_eq!(views.len(), 5);
        let RenderedView::Relationship(scatter) = &views[1] else {
            panic!("expected relationship view");
        };
        assert_eq!(scatter.y_feature, "mean texture");
    }

    #[test]
    fn stale_selection_surfaces_as_error() {
        let mut s = state();
        s.select_first("gone");
        assert!(matches!(
            s.render(),
            Err(DashboardError::InvalidSelection(name)) if name == "gone"
        ));
    }
}
