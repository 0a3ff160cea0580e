// ---------------------------------------------------------------------------
// Distribution view
// ---------------------------------------------------------------------------

/// One equal-width bin. All bins are half-open except the last, which also
/// includes its upper edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Histogram of one feature column.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub feature: String,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn new(feature: &str, values: &[f64], bin_count: usize) -> Self {
        Self {
            feature: feature.to_string(),
            bins: bin_values(values, bin_count),
        }
    }

    /// Number of values counted across all bins.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// Split `[min, max]` of `values` into `bin_count` equal-width bins and count.
///
/// A constant column is widened to `[v - 0.5, v + 0.5]` and an empty one
/// spans `[0, 1]`, so the bin edges are always strictly increasing.
pub fn bin_values(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    let bin_count = bin_count.max(1);

    let (mut lo, mut hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if values.is_empty() {
        (lo, hi) = (0.0, 1.0);
    } else if lo == hi {
        (lo, hi) = (lo - 0.5, hi + 0.5);
    }

    let width = (hi - lo) / bin_count as f64;
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|i| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bin_count {
                hi
            } else {
                lo + width * (i + 1) as f64
            },
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bin_count - 1);
        bins[idx].count += 1;
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_value_once() {
        let values: Vec<f64> = (0..569).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();
        let h = Histogram::new("mean radius", &values, 30);
        assert_eq!(h.bins.len(), 30);
        assert_eq!(h.total(), 569);
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let bins = bin_values(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, [1, 1, 1, 2]);
        assert_eq!(bins[0].start, 0.0);
        assert_eq!(bins[3].end, 4.0);
    }

    #[test]
    fn constant_column_is_widened() {
        let bins = bin_values(&[5.0, 5.0, 5.0], 30);
        assert_eq!(bins[0].start, 4.5);
        assert_eq!(bins[29].end, 5.5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 3);
        assert!(bins.iter().all(|b| b.width() > 0.0));
    }

    #[test]
    fn empty_column_has_empty_bins() {
        let bins = bin_values(&[], 30);
        assert_eq!(bins.len(), 30);
        assert!(bins.iter().all(|b| b.count == 0));
        assert!((bins[0].center() - 1.0 / 60.0).abs() < 1e-12);
    }
}
