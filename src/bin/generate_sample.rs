use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// The ten base measurements, each with (benign mean, malignant mean,
/// relative spread). The dataset reports each as a mean, a standard error
/// and a worst value.
const MEASUREMENTS: [(&str, f64, f64, f64); 10] = [
    ("radius", 12.15, 17.46, 0.15),
    ("texture", 17.91, 21.60, 0.22),
    ("perimeter", 78.08, 115.37, 0.15),
    ("area", 462.8, 978.4, 0.30),
    ("smoothness", 0.0925, 0.1029, 0.14),
    ("compactness", 0.0801, 0.1452, 0.35),
    ("concavity", 0.0461, 0.1608, 0.50),
    ("concave points", 0.0257, 0.0880, 0.45),
    ("symmetry", 0.1742, 0.1929, 0.14),
    ("fractal dimension", 0.0629, 0.0627, 0.11),
];

/// Scale of the error and worst columns relative to the mean column.
const ERROR_SCALE: f64 = 0.1;
const WORST_SCALE: f64 = 1.25;

const BENIGN_ROWS: usize = 357;
const MALIGNANT_ROWS: usize = 212;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Column name and per-class mean of all 30 features, in dataset order.
fn feature_specs() -> Vec<(String, f64, f64, f64)> {
    let groups = [("mean {}", 1.0), ("{} error", ERROR_SCALE), ("worst {}", WORST_SCALE)];
    groups
        .iter()
        .flat_map(|&(pattern, scale)| {
            MEASUREMENTS.iter().map(move |&(name, benign, malignant, spread)| {
                (
                    pattern.replace("{}", name),
                    benign * scale,
                    malignant * scale,
                    spread,
                )
            })
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let specs = feature_specs();

    // Benign rows first, then malignant, as a single batch.
    let diagnoses: Vec<&str> = std::iter::repeat("B")
        .take(BENIGN_ROWS)
        .chain(std::iter::repeat("M").take(MALIGNANT_ROWS))
        .collect();

    let mut fields = vec![Field::new("id", DataType::Int64, false)];
    let mut arrays: Vec<ArrayRef> = vec![Arc::new(Int64Array::from_iter_values(
        (0..diagnoses.len() as i64).map(|i| 840_000 + i),
    ))];

    for (name, benign, malignant, spread) in &specs {
        let values: Vec<f64> = diagnoses
            .iter()
            .map(|&d| {
                let mean = if d == "B" { *benign } else { *malignant };
                rng.gauss(mean, mean * spread).abs()
            })
            .collect();
        fields.push(Field::new(name.as_str(), DataType::Float64, false));
        arrays.push(Arc::new(Float64Array::from(values)));
    }

    fields.push(Field::new("diagnosis", DataType::Utf8, false));
    arrays.push(Arc::new(StringArray::from(diagnoses.clone())));

    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), arrays)?;

    // Write Parquet
    let output_path = "sample_breast_cancer.parquet";
    let file = std::fs::File::create(output_path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;

    println!(
        "Wrote {} rows ({BENIGN_ROWS} benign, {MALIGNANT_ROWS} malignant, {} features) to {output_path}",
        diagnoses.len(),
        specs.len()
    );
    Ok(())
}
