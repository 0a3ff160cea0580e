use crate::data::places::PlacePoint;

/// Degrees of longitude a web map shows across 256 px at zoom level 0.
const WORLD_SPAN_DEG: f64 = 360.0;

/// Static marker map. Independent of the user's selection.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoMap {
    pub places: &'static [PlacePoint],
    pub zoom: f64,
}

impl GeoMap {
    pub fn new(places: &'static [PlacePoint], zoom: f64) -> Self {
        Self { places, zoom }
    }

    /// `[longitude, latitude]` of the marker centroid; `[0, 0]` with no markers.
    pub fn center(&self) -> [f64; 2] {
        if self.places.is_empty() {
            return [0.0, 0.0];
        }
        let n = self.places.len() as f64;
        let (lon, lat) = self
            .places
            .iter()
            .fold((0.0, 0.0), |(lon, lat), p| (lon + p.longitude, lat + p.latitude));
        [lon / n, lat / n]
    }

    /// Initial visible half-extent in degrees, halving per zoom level.
    pub fn half_extent(&self) -> f64 {
        WORLD_SPAN_DEG / 2f64.powf(self.zoom) / 2.0
    }

    /// `[longitude, latitude]` of every marker.
    pub fn marker_positions(&self) -> Vec<[f64; 2]> {
        self.places.iter().map(|p| [p.longitude, p.latitude]).collect()
    }

    /// The marker closest to `[longitude, latitude]`, if any lies within `radius` degrees.
    pub fn nearest(&self, lon: f64, lat: f64, radius: f64) -> Option<&'static PlacePoint> {
        let places: &'static [PlacePoint] = self.places;
        places
            .iter()
            .map(|p| (p, (p.longitude - lon).hypot(p.latitude - lat)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(p, _)| p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::places::TREATMENT_CENTERS;

    const TWO: &[PlacePoint] = &[
        PlacePoint::new("west", 10.0, 70.0),
        PlacePoint::new("east", 20.0, 80.0),
    ];

    #[test]
    fn centroid_and_extent() {
        let map = GeoMap::new(TWO, 3.0);
        assert_eq!(map.center(), [75.0, 15.0]);
        assert_eq!(map.half_extent(), 22.5);
    }

    #[test]
    fn nearest_marker_within_radius() {
        let map = GeoMap::new(TWO, 3.0);
        assert_eq!(map.nearest(79.5, 19.5, 1.0).map(|p| p.name), Some("east"));
        assert!(map.nearest(75.0, 15.0, 1.0).is_none());
    }

    #[test]
    fn centroid_of_treatment_centres_is_in_india() {
        let [lon, lat] = GeoMap::new(TREATMENT_CENTERS, 3.0).center();
        assert!((68.0..=97.0).contains(&lon));
        assert!((6.0..=36.0).contains(&lat));
    }
}
