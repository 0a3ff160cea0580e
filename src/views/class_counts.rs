use crate::data::model::Diagnosis;

// ---------------------------------------------------------------------------
// Class-count views (bar and pie)
// ---------------------------------------------------------------------------

/// Row count of one diagnosis category with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassCount {
    pub diagnosis: Diagnosis,
    pub label: &'static str,
    pub count: usize,
}

/// Per-category counts in label code order: `[Benign, Malignant]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCounts {
    pub classes: [ClassCount; 2],
}

impl ClassCounts {
    /// Wrap raw counts indexed by label code.
    pub fn new(counts: [usize; 2]) -> Self {
        Self {
            classes: Diagnosis::ALL.map(|d| ClassCount {
                diagnosis: d,
                label: d.display_name(),
                count: counts[d.code() as usize],
            }),
        }
    }

    pub fn total(&self) -> usize {
        self.classes.iter().map(|c| c.count).sum()
    }
}

/// One pie wedge. Angles are in degrees, counter-clockwise from the +x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieWedge {
    pub class: ClassCount,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieWedge {
    /// Percentage label, one decimal place.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Point on the wedge's bisector at `radius` from the centre.
    pub fn anchor(&self, radius: f64) -> [f64; 2] {
        let a = self.mid_angle().to_radians();
        [radius * a.cos(), radius * a.sin()]
    }

    /// Closed outline of the wedge of a unit-centred pie: centre, then the arc.
    pub fn outline(&self, radius: f64, steps_per_turn: usize) -> Vec<[f64; 2]> {
        let sweep = self.end_angle - self.start_angle;
        let steps = ((sweep / 360.0 * steps_per_turn as f64).ceil() as usize).max(1);
        let mut points = Vec::with_capacity(steps + 2);
        points.push([0.0, 0.0]);
        for i in 0..=steps {
            let a = (self.start_angle + sweep * i as f64 / steps as f64).to_radians();
            points.push([radius * a.cos(), radius * a.sin()]);
        }
        points
    }

    /// Split into sub-wedges of at most `max_sweep` degrees each, so every
    /// piece is convex when `max_sweep <= 180`.
    pub fn convex_pieces(&self, max_sweep: f64) -> Vec<PieWedge> {
        let sweep = self.end_angle - self.start_angle;
        let n = ((sweep / max_sweep).ceil() as usize).max(1);
        let step = sweep / n as f64;
        (0..n)
            .map(|i| PieWedge {
                start_angle: self.start_angle + step * i as f64,
                end_angle: if i + 1 == n {
                    self.end_angle
                } else {
                    self.start_angle + step * (i + 1) as f64
                },
                ..*self
            })
            .collect()
    }
}

/// Same counts as [`ClassCounts`], as wedges starting at a fixed angle.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub counts: ClassCounts,
    pub wedges: Vec<PieWedge>,
}

impl PieChart {
    pub fn new(counts: ClassCounts, start_angle: f64) -> Self {
        let total = counts.total();
        let mut angle = start_angle;
        let wedges = counts
            .classes
            .iter()
            .map(|&class| {
                let fraction = if total == 0 {
                    0.0
                } else {
                    class.count as f64 / total as f64
                };
                let start = angle;
                angle += fraction * 360.0;
                PieWedge {
                    class,
                    fraction,
                    start_angle: start,
                    end_angle: angle,
                }
            })
            .collect();
        Self { counts, wedges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_in_code_order() {
        let c = ClassCounts::new([3, 5]);
        assert_eq!(c.classes[0].label, "Benign");
        assert_eq!(c.classes[0].count, 3);
        assert_eq!(c.classes[1].label, "Malignant");
        assert_eq!(c.classes[1].count, 5);
        assert_eq!(c.total(), 8);
    }

    #[test]
    fn wedges_cover_the_full_circle() {
        let pie = PieChart::new(ClassCounts::new([1, 3]), 140.0);
        assert_eq!(pie.wedges[0].start_angle, 140.0);
        assert_eq!(pie.wedges[0].end_angle, 230.0);
        assert_eq!(pie.wedges[1].end_angle, 500.0);
        assert_eq!(pie.wedges[0].percent_label(), "25.0%");
        assert_eq!(pie.wedges[1].percent_label(), "75.0%");
    }

    #[test]
    fn empty_counts_give_zero_wedges() {
        let pie = PieChart::new(ClassCounts::new([0, 0]), 140.0);
        assert!(pie.wedges.iter().all(|w| w.fraction == 0.0));
        assert_eq!(pie.wedges[0].percent_label(), "0.0%");
    }

    #[test]
    fn outline_starts_at_centre_and_follows_arc() {
        let pie = PieChart::new(ClassCounts::new([1, 1]), 0.0);
        let outline = pie.wedges[0].outline(1.0, 64);
        assert_eq!(outline[0], [0.0, 0.0]);
        assert_eq!(outline[1], [1.0, 0.0]);
        let last = outline[outline.len() - 1];
        assert!((last[0] + 1.0).abs() < 1e-9 && last[1].abs() < 1e-9);

        let anchor = pie.wedges[0].anchor(0.5);
        assert!(anchor[0].abs() < 1e-9 && (anchor[1] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn large_wedges_split_into_convex_pieces() {
        let pie = PieChart::new(ClassCounts::new([212, 357]), 140.0);
        let big = pie.wedges[1];
        let pieces = big.convex_pieces(90.0);
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].start_angle, big.start_angle);
        assert_eq!(pieces[2].end_angle, big.end_angle);
        assert!(pieces
            .iter()
            .all(|p| p.end_angle - p.start_angle <= 90.0 + 1e-9));
        assert_eq!(pie.wedges[0].convex_pieces(180.0).len(), 1);
    }
}
