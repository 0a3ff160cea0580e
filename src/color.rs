use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

use crate::data::model::Diagnosis;

// ---------------------------------------------------------------------------
// Fixed chart colours
// ---------------------------------------------------------------------------

pub const HISTOGRAM_FILL: Color32 = Color32::from_rgb(0x87, 0xce, 0xeb); // skyblue
pub const HISTOGRAM_EDGE: Color32 = Color32::BLACK;

/// Bar colours in label code order.
pub const BAR_COLORS: [Color32; 2] = [Color32::BLUE, Color32::RED];

/// Pie wedge colours in label code order.
pub const PIE_COLORS: [Color32; 2] = [
    Color32::from_rgb(0x1f, 0x77, 0xb4),
    Color32::from_rgb(0xff, 0x7f, 0x0e),
];

pub const MAP_MARKER: Color32 = Color32::from_rgb(0xff, 0x4b, 0x4b);

// ---------------------------------------------------------------------------
// Viridis colormap
// ---------------------------------------------------------------------------

/// Control points of viridis at t = 0, 0.25, 0.5, 0.75, 1.
const VIRIDIS_STOPS: [(f32, f32, f32); 5] = [
    (0.267, 0.005, 0.329),
    (0.229, 0.322, 0.545),
    (0.128, 0.567, 0.551),
    (0.369, 0.789, 0.383),
    (0.993, 0.906, 0.144),
];

/// Sample viridis at `t` in `[0, 1]`, interpolating in linear RGB.
pub fn viridis(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let segments = (VIRIDIS_STOPS.len() - 1) as f32;
    let pos = t * segments;
    let idx = (pos.floor() as usize).min(VIRIDIS_STOPS.len() - 2);
    let frac = pos - idx as f32;

    let to_linear = |(r, g, b): (f32, f32, f32)| -> LinSrgb { Srgb::new(r, g, b).into_linear() };
    let mixed = to_linear(VIRIDIS_STOPS[idx]).mix(to_linear(VIRIDIS_STOPS[idx + 1]), frac);
    let rgb: Srgb = Srgb::from_linear(mixed);

    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// Scatter colour of a diagnosis: its label code normalised onto viridis.
pub fn diagnosis_color(d: Diagnosis) -> Color32 {
    viridis(d.code() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viridis_endpoints() {
        assert_eq!(viridis(0.0), Color32::from_rgb(68, 1, 84));
        assert_eq!(viridis(1.0), Color32::from_rgb(253, 231, 37));
        assert_eq!(viridis(-3.0), viridis(0.0));
    }

    #[test]
    fn diagnoses_get_distinct_colours() {
        assert_ne!(
            diagnosis_color(Diagnosis::Benign),
            diagnosis_color(Diagnosis::Malignant)
        );
    }
}
