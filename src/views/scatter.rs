use crate::data::model::Diagnosis;

// ---------------------------------------------------------------------------
// Relationship view
// ---------------------------------------------------------------------------

/// Points of one diagnosis category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub diagnosis: Diagnosis,
    pub points: Vec<[f64; 2]>,
}

/// `x_feature` against `y_feature`, one series per diagnosis in code order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    pub x_feature: String,
    pub y_feature: String,
    pub series: Vec<ScatterSeries>,
}

impl Scatter {
    pub fn new(x_feature: &str, x: &[f64], y_feature: &str, y: &[f64], labels: &[Diagnosis]) -> Self {
        let series = Diagnosis::ALL
            .iter()
            .map(|&diagnosis| ScatterSeries {
                diagnosis,
                points: x
                    .iter()
                    .zip(y)
                    .zip(labels)
                    .filter(|(_, label)| **label == diagnosis)
                    .map(|((&xi, &yi), _)| [xi, yi])
                    .collect(),
            })
            .collect();

        Self {
            x_feature: x_feature.to_string(),
            y_feature: y_feature.to_string(),
            series,
        }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_points_by_diagnosis() {
        let labels = [Diagnosis::Malignant, Diagnosis::Benign, Diagnosis::Malignant];
        let s = Scatter::new("a", &[1.0, 2.0, 3.0], "b", &[4.0, 5.0, 6.0], &labels);

        assert_eq!(s.series.len(), 2);
        assert_eq!(s.series[0].diagnosis, Diagnosis::Benign);
        assert_eq!(s.series[0].points, vec![[2.0, 5.0]]);
        assert_eq!(s.series[1].points, vec![[1.0, 4.0], [3.0, 6.0]]);
        assert_eq!(s.point_count(), 3);
    }

    #[test]
    fn same_feature_on_both_axes() {
        let labels = [Diagnosis::Benign, Diagnosis::Benign];
        let v = [1.5, 2.5];
        let s = Scatter::new("a", &v, "a", &v, &labels);
        assert_eq!(s.series[0].points, vec![[1.5, 1.5], [2.5, 2.5]]);
        assert!(s.series[1].points.is_empty());
    }
}
