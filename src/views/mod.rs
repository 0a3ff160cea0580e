//! View layer: turns the table and the current selection into drawable views.
//!
//! ```text
//!   FeatureTable + Selection + RenderOptions
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  render   │  pure, recomputed on every pass
//!   └──────────┘
//!        │
//!        ▼
//!   [Distribution, Relationship, ClassBar, ClassPie, Geography]
//! ```

pub mod class_counts;
pub mod geography;
pub mod histogram;
pub mod scatter;

use crate::config::DashboardConfig;
use crate::data::model::{FeatureTable, Selection};
use crate::data::places::TREATMENT_CENTERS;
use crate::error::DashboardError;

use class_counts::{ClassCounts, PieChart};
use geography::GeoMap;
use histogram::Histogram;
use scatter::Scatter;

// ---------------------------------------------------------------------------
// Render options
// ---------------------------------------------------------------------------

/// Fixed drawing parameters of a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub histogram_bins: usize,
    pub pie_start_angle: f64,
    pub map_zoom: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            histogram_bins: 30,
            pie_start_angle: 140.0,
            map_zoom: 3.0,
        }
    }
}

impl From<&DashboardConfig> for RenderOptions {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            histogram_bins: config.histogram_bins,
            pie_start_angle: config.pie_start_angle,
            map_zoom: config.map_zoom,
        }
    }
}

// ---------------------------------------------------------------------------
// RenderedView
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Distribution,
    Relationship,
    ClassBar,
    ClassPie,
    Geography,
}

/// One unit of output of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedView {
    Distribution(Histogram),
    Relationship(Scatter),
    ClassBar(ClassCounts),
    ClassPie(PieChart),
    Geography(GeoMap),
}

impl RenderedView {
    pub fn kind(&self) -> ViewKind {
        match self {
            RenderedView::Distribution(_) => ViewKind::Distribution,
            RenderedView::Relationship(_) => ViewKind::Relationship,
            RenderedView::ClassBar(_) => ViewKind::ClassBar,
            RenderedView::ClassPie(_) => ViewKind::ClassPie,
            RenderedView::Geography(_) => ViewKind::Geography,
        }
    }

    /// Heading shown above the view.
    pub fn title(&self) -> &'static str {
        match self.kind() {
            ViewKind::Distribution => "Histogram of Selected Feature",
            ViewKind::Relationship => "Scatter Plot of Two Features",
            ViewKind::ClassBar => "Bar Chart of Class Distribution",
            ViewKind::ClassPie => "Pie Chart of Class Distribution",
            ViewKind::Geography => "Breast Cancer Treatment Centers Across India",
        }
    }
}

/// Produce every view for one pass, in display order.
///
/// Fails with [`DashboardError::InvalidSelection`] when either selected name
/// is not a column of `table`.
pub fn render(
    table: &FeatureTable,
    selection: &Selection,
    options: &RenderOptions,
) -> Result<Vec<RenderedView>, DashboardError> {
    let first = table.column(&selection.first)?;
    let second = table.column(&selection.second)?;
    let counts = ClassCounts::new(table.class_counts());

    Ok(vec![
        RenderedView::Distribution(Histogram::new(
            &selection.first,
            first,
            options.histogram_bins,
        )),
        RenderedView::Relationship(Scatter::new(
            &selection.first,
            first,
            &selection.second,
            second,
            table.labels(),
        )),
        RenderedView::ClassBar(counts.clone()),
        RenderedView::ClassPie(PieChart::new(counts, options.pie_start_angle)),
        RenderedView::Geography(GeoMap::new(TREATMENT_CENTERS, options.map_zoom)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::FEATURE_NAMES;
    use crate::data::model::{Diagnosis, FeatureColumn};

    /// 569 rows, 30 features, 212 rows coded 0 then 357 coded 1.
    fn wdbc_shaped_table() -> FeatureTable {
        let rows = 569;
        let columns = FEATURE_NAMES
            .iter()
            .enumerate()
            .map(|(j, name)| {
                let values = (0..rows)
                    .map(|i| ((i * 7 + j * 13) % 101) as f64 * 0.25 + j as f64)
                    .collect();
                FeatureColumn::new(*name, values)
            })
            .collect();
        let labels = (0..rows)
            .map(|i| if i < 212 { Diagnosis::Benign } else { Diagnosis::Malignant })
            .collect();
        FeatureTable::new(columns, labels).unwrap()
    }

    fn kinds(views: &[RenderedView]) -> Vec<ViewKind> {
        views.iter().map(RenderedView::kind).collect()
    }

    #[test]
    fn five_views_in_fixed_order_for_every_selection() {
        let table = wdbc_shaped_table();
        let options = RenderOptions::default();
        let expected = [
            ViewKind::Distribution,
            ViewKind::Relationship,
            ViewKind::ClassBar,
            ViewKind::ClassPie,
            ViewKind::Geography,
        ];
        for f1 in FEATURE_NAMES.iter().step_by(7) {
            for f2 in FEATURE_NAMES.iter().step_by(5) {
                let views = render(&table, &Selection::new(*f1, *f2), &options).unwrap();
                assert_eq!(kinds(&views), expected);
            }
        }
    }

    #[test]
    fn scenario_mean_radius_against_mean_texture() {
        let table = wdbc_shaped_table();
        let selection = Selection::new("mean radius", "mean texture");
        let views = render(&table, &selection, &RenderOptions::default()).unwrap();

        let RenderedView::Distribution(hist) = &views[0] else {
            panic!("expected distribution view");
        };
        assert_eq!(hist.feature, "mean radius");
        assert_eq!(hist.bins.len(), 30);
        assert_eq!(hist.total(), 569);

        let RenderedView::Relationship(scatter) = &views[1] else {
            panic!("expected relationship view");
        };
        assert_eq!(scatter.x_feature, "mean radius");
        assert_eq!(scatter.y_feature, "mean texture");
        assert_eq!(scatter.point_count(), 569);

        let RenderedView::ClassBar(bars) = &views[2] else {
            panic!("expected bar view");
        };
        let bar_pairs: Vec<(&str, usize)> =
            bars.classes.iter().map(|c| (c.label, c.count)).collect();
        assert_eq!(bar_pairs, [("Benign", 212), ("Malignant", 357)]);

        let RenderedView::ClassPie(pie) = &views[3] else {
            panic!("expected pie view");
        };
        let percent: f64 = pie.wedges.iter().map(|w| w.fraction * 100.0).sum();
        assert!((percent - 100.0).abs() < 1e-9);
        assert_eq!(pie.counts.total(), 569);
        assert_eq!(pie.wedges[0].start_angle, 140.0);
        assert_eq!(pie.wedges[0].percent_label(), "37.3%");
        assert_eq!(pie.wedges[1].percent_label(), "62.7%");
    }

    #[test]
    fn geography_ignores_selection() {
        let table = wdbc_shaped_table();
        for selection in [
            Selection::new("mean radius", "mean radius"),
            Selection::new("worst symmetry", "area error"),
        ] {
            let views = render(&table, &selection, &RenderOptions::default()).unwrap();
            let RenderedView::Geography(map) = &views[4] else {
                panic!("expected geography view");
            };
            assert_eq!(map.places.len(), TREATMENT_CENTERS.len());
            assert_eq!(map.zoom, 3.0);
        }
    }

    #[test]
    fn unknown_column_propagates() {
        let table = wdbc_shaped_table();
        for selection in [
            Selection::new("mean radius", "bogus"),
            Selection::new("bogus", "mean radius"),
        ] {
            match render(&table, &selection, &RenderOptions::default()) {
                Err(DashboardError::InvalidSelection(name)) => assert_eq!(name, "bogus"),
                other => panic!("unexpected: {other:?}"),
            }
        }
    }

    #[test]
    fn titles_follow_view_order() {
        let table = wdbc_shaped_table();
        let views = render(
            &table,
            &Selection::initial(&table),
            &RenderOptions::default(),
        )
        .unwrap();
        let titles: Vec<&str> = views.iter().map(RenderedView::title).collect();
        assert_eq!(titles[0], "Histogram of Selected Feature");
        assert_eq!(titles[4], "Breast Cancer Treatment Centers Across India");
    }

    #[test]
    fn render_does_not_touch_the_table() {
        let table = wdbc_shaped_table();
        let before = table.column("mean area").unwrap().to_vec();
        let selection = Selection::new("mean area", "mean area");
        let a = render(&table, &selection, &RenderOptions::default()).unwrap();
        let b = render(&table, &selection, &RenderOptions::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(table.column("mean area").unwrap(), before.as_slice());
    }
}
