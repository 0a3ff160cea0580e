use eframe::egui::{Color32, Grid, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use super::{label_cell, LABEL_HEADER};
use crate::color::{
    diagnosis_color, BAR_COLORS, HISTOGRAM_EDGE, HISTOGRAM_FILL, MAP_MARKER, PIE_COLORS,
};
use crate::views::class_counts::{ClassCounts, PieChart};
use crate::views::geography::GeoMap;
use crate::views::histogram::Histogram;
use crate::views::scatter::Scatter;
use crate::views::RenderedView;

const PLOT_HEIGHT: f32 = 360.0;
const SQUARE_PLOT_HEIGHT: f32 = 300.0;

/// Hover radius, in degrees, for naming a map marker.
const MARKER_HOVER_DEG: f64 = 0.5;

// ---------------------------------------------------------------------------
// View dispatch (central panel)
// ---------------------------------------------------------------------------

/// Draw one rendered view under its heading.
pub fn rendered_view(ui: &mut Ui, view: &RenderedView) {
    ui.heading(view.title());
    match view {
        RenderedView::Distribution(hist) => histogram_plot(ui, hist),
        RenderedView::Relationship(scatter) => scatter_plot(ui, scatter),
        RenderedView::ClassBar(counts) => class_bar_plot(ui, counts),
        RenderedView::ClassPie(pie) => class_pie_plot(ui, pie),
        RenderedView::Geography(map) => geography_plot(ui, map),
    }
    ui.add_space(16.0);
}

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

fn histogram_plot(ui: &mut Ui, hist: &Histogram) {
    let bars: Vec<Bar> = hist
        .bins
        .iter()
        .map(|b| {
            Bar::new(b.center(), b.count as f64)
                .width(b.width())
                .fill(HISTOGRAM_FILL)
                .stroke(Stroke::new(1.0, HISTOGRAM_EDGE))
        })
        .collect();

    Plot::new("histogram")
        .height(PLOT_HEIGHT)
        .x_axis_label(hist.feature.as_str())
        .y_axis_label("Frequency")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name(format!("n = {}", hist.total())));
        });
}

fn scatter_plot(ui: &mut Ui, scatter: &Scatter) {
    ui.weak(format!("n = {}", scatter.point_count()));
    Plot::new("scatter")
        .height(PLOT_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(scatter.x_feature.as_str())
        .y_axis_label(scatter.y_feature.as_str())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for series in &scatter.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(series.diagnosis.display_name())
                        .color(diagnosis_color(series.diagnosis))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(3.0),
                );
            }
        });
}

fn class_bar_plot(ui: &mut Ui, counts: &ClassCounts) {
    let bars: Vec<Bar> = counts
        .classes
        .iter()
        .enumerate()
        .map(|(i, class)| {
            Bar::new(i as f64, class.count as f64)
                .width(0.8)
                .name(class.label)
                .fill(BAR_COLORS[i])
        })
        .collect();

    let tick_labels = counts.classes.map(|c| c.label);
    Plot::new("class_bar")
        .height(SQUARE_PLOT_HEIGHT)
        .x_axis_label("Class")
        .y_axis_label("Count")
        .x_axis_formatter(move |mark, _range| class_tick(&tick_labels, mark.value))
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Category name on integer ticks that index a class, nothing elsewhere.
fn class_tick(labels: &[&str], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels
        .get(idx as usize)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

fn class_pie_plot(ui: &mut Ui, pie: &PieChart) {
    // Raw counts next to the chart.
    Grid::new("class_counts").striped(true).show(ui, |ui| {
        ui.strong(LABEL_HEADER);
        ui.strong("count");
        ui.end_row();
        for class in &pie.counts.classes {
            ui.label(label_cell(class.diagnosis));
            ui.label(class.count.to_string());
            ui.end_row();
        }
    });

    Plot::new("class_pie")
        .height(SQUARE_PLOT_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.4)
        .include_x(1.4)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            for (i, wedge) in pie.wedges.iter().enumerate() {
                for piece in wedge.convex_pieces(90.0) {
                    let outline: PlotPoints = piece.outline(1.0, 180).into_iter().collect();
                    plot_ui.polygon(
                        Polygon::new(outline)
                            .name(wedge.class.label)
                            .fill_color(PIE_COLORS[i])
                            .stroke(Stroke::new(1.0, PIE_COLORS[i])),
                    );
                }

                let [x, y] = wedge.anchor(0.6);
                plot_ui.text(Text::new(PlotPoint::new(x, y), wedge.percent_label()).color(Color32::WHITE));
                let [x, y] = wedge.anchor(1.15);
                plot_ui.text(Text::new(PlotPoint::new(x, y), wedge.class.label));
            }
        });
}

// ---------------------------------------------------------------------------
// Map
// ---------------------------------------------------------------------------

fn geography_plot(ui: &mut Ui, map: &GeoMap) {
    let [cx, cy] = map.center();
    let half = map.half_extent();
    let hover_map = map.clone();

    Plot::new("treatment_centers")
        .height(PLOT_HEIGHT)
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .include_x(cx - half)
        .include_x(cx + half)
        .include_y(cy - half)
        .include_y(cy + half)
        .allow_scroll(false)
        .label_formatter(move |_name, value| {
            match hover_map.nearest(value.x, value.y, MARKER_HOVER_DEG) {
                Some(place) => format!(
                    "{}\n{:.4}°N {:.4}°E",
                    place.name, place.latitude, place.longitude
                ),
                None => format!("{:.2}°N {:.2}°E", value.y, value.x),
            }
        })
        .show(ui, |plot_ui| {
            let points: PlotPoints = map.marker_positions().into_iter().collect();
            plot_ui.points(
                Points::new(points)
                    .name("Treatment centers")
                    .color(MAP_MARKER)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(4.0),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_ticks_only_on_class_positions() {
        let labels = ["Benign", "Malignant"];
        assert_eq!(class_tick(&labels, 0.0), "Benign");
        assert_eq!(class_tick(&labels, 1.0), "Malignant");
        assert_eq!(class_tick(&labels, 0.5), "");
        assert_eq!(class_tick(&labels, 2.0), "");
        assert_eq!(class_tick(&labels, -1.0), "");
    }
}
