use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use csv::StringRecord;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{Diagnosis, FeatureColumn, FeatureTable};

/// Canonical column names of the Wisconsin diagnostic dataset, in file order.
pub const FEATURE_NAMES: [&str; 30] = [
    "mean radius",
    "mean texture",
    "mean perimeter",
    "mean area",
    "mean smoothness",
    "mean compactness",
    "mean concavity",
    "mean concave points",
    "mean symmetry",
    "mean fractal dimension",
    "radius error",
    "texture error",
    "perimeter error",
    "area error",
    "smoothness error",
    "compactness error",
    "concavity error",
    "concave points error",
    "symmetry error",
    "fractal dimension error",
    "worst radius",
    "worst texture",
    "worst perimeter",
    "worst area",
    "worst smoothness",
    "worst compactness",
    "worst concavity",
    "worst concave points",
    "worst symmetry",
    "worst fractal dimension",
];

// ---------------------------------------------------------------------------
// Class order: what a source's integer codes mean
// ---------------------------------------------------------------------------

/// `0 = malignant, 1 = benign`, as scikit-learn documents its target.
const SKLEARN_ORDER: ClassOrder = ClassOrder([Diagnosis::Malignant, Diagnosis::Benign]);

/// Maps a source's integer label codes onto [`Diagnosis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClassOrder([Diagnosis; 2]);

impl ClassOrder {
    /// Build from the class names a source declares for codes 0 and 1.
    fn from_names(class0: &str, class1: &str) -> Result<Self> {
        let first = Diagnosis::parse_text(class0)
            .with_context(|| format!("unknown class name '{class0}'"))?;
        let second = Diagnosis::parse_text(class1)
            .with_context(|| format!("unknown class name '{class1}'"))?;
        if first == second {
            bail!("both classes are named '{class0}'");
        }
        Ok(ClassOrder([first, second]))
    }

    fn decode(&self, code: i64) -> Result<Diagnosis> {
        match code {
            0 | 1 => Ok(self.0[code as usize]),
            other => bail!("label code {other} is not 0 or 1"),
        }
    }
}

// ---------------------------------------------------------------------------
// Label column: how its cells are read
// ---------------------------------------------------------------------------

/// The label column a headered source carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelColumn {
    /// `target`: integer codes in scikit-learn's order, or text.
    Target,
    /// `diagnosis`: text only. Integer codes have no documented order here.
    Diagnosis,
}

impl LabelColumn {
    fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("target") {
            Some(LabelColumn::Target)
        } else if name.eq_ignore_ascii_case("diagnosis") {
            Some(LabelColumn::Diagnosis)
        } else {
            None
        }
    }

    fn name(self) -> &'static str {
        match self {
            LabelColumn::Target => "target",
            LabelColumn::Diagnosis => "diagnosis",
        }
    }

    /// A text cell.
    fn parse(self, s: &str) -> Result<Diagnosis> {
        if let Some(d) = Diagnosis::parse_text(s) {
            return Ok(d);
        }
        match self {
            LabelColumn::Target => SKLEARN_ORDER.decode(parse_code(s)?),
            LabelColumn::Diagnosis => {
                bail!("'{s}' is not B, M, benign or malignant")
            }
        }
    }

    /// An integer cell.
    fn decode(self, code: i64) -> Result<Diagnosis> {
        match self {
            LabelColumn::Target => SKLEARN_ORDER.decode(code),
            LabelColumn::Diagnosis => bail!(
                "integer code {code} in a 'diagnosis' column; use B/M text or a 'target' column"
            ),
        }
    }
}

/// First column whose name marks it as the label.
fn find_label_column<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<(usize, LabelColumn)> {
    names
        .into_iter()
        .enumerate()
        .find_map(|(i, name)| LabelColumn::from_name(name).map(|kind| (i, kind)))
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the feature table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – scikit-learn's bundled `breast_cancer.csv`, UCI `wdbc.data`
///   rows, or a headered export with a `target` / `diagnosis` column
/// * `.data`    – UCI `wdbc.data`
/// * `.parquet` – numeric feature columns plus `target` / `diagnosis`
pub fn load_file(path: &Path) -> Result<FeatureTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" | "data" => {
            let file = std::fs::File::open(path).context("opening CSV")?;
            read_csv(file)
        }
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read any of the CSV layouts, sniffing the layout from the first record.
pub fn read_csv<R: Read>(input: R) -> Result<FeatureTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let records: Vec<StringRecord> = reader
        .records()
        .enumerate()
        .map(|(row_no, r)| r.with_context(|| format!("CSV row {row_no}")))
        .collect::<Result<_>>()?;

    let Some(first) = records.first() else {
        bail!("CSV file is empty");
    };

    if is_sklearn_header(first) {
        log::debug!("CSV layout: scikit-learn bundled file");
        read_sklearn(&records)
    } else if first.len() > 2 && Diagnosis::parse_text(&first[1]).is_some() && first[1].len() == 1 {
        log::debug!("CSV layout: UCI wdbc.data");
        read_wdbc(&records)
    } else {
        log::debug!("CSV layout: headered table");
        read_headered(&records)
    }
}

/// `569,30,malignant,benign`: two counts followed by two class names.
fn is_sklearn_header(record: &StringRecord) -> bool {
    record.len() == 4
        && record[0].parse::<usize>().is_ok()
        && record[1].parse::<usize>().is_ok()
        && record[2].parse::<f64>().is_err()
        && record[3].parse::<f64>().is_err()
}

fn read_sklearn(records: &[StringRecord]) -> Result<FeatureTable> {
    let header = &records[0];
    let n_samples: usize = header[0].parse().context("sample count")?;
    let n_features: usize = header[1].parse().context("feature count")?;
    let order = ClassOrder::from_names(&header[2], &header[3]).context("class names")?;

    let rows = &records[1..];
    if rows.len() != n_samples {
        bail!("header declares {n_samples} samples but the file has {}", rows.len());
    }

    let names = feature_names(n_features);
    let mut values: Vec<Vec<f64>> = vec![Vec::with_capacity(n_samples); n_features];
    let mut labels = Vec::with_capacity(n_samples);

    for (i, record) in rows.iter().enumerate() {
        let row_no = i + 1;
        if record.len() != n_features + 1 {
            bail!(
                "CSV row {row_no}: expected {} fields, got {}",
                n_features + 1,
                record.len()
            );
        }
        for (j, column) in values.iter_mut().enumerate() {
            column.push(parse_feature(&record[j], row_no, &names[j])?);
        }
        let code = parse_code(&record[n_features])
            .with_context(|| format!("CSV row {row_no}: label"))?;
        labels.push(order.decode(code).with_context(|| format!("CSV row {row_no}"))?);
    }

    build_table(names, values, labels)
}

fn read_wdbc(records: &[StringRecord]) -> Result<FeatureTable> {
    let n_features = records[0].len() - 2;
    let names = feature_names(n_features);
    let mut values: Vec<Vec<f64>> = vec![Vec::with_capacity(records.len()); n_features];
    let mut labels = Vec::with_capacity(records.len());

    for (row_no, record) in records.iter().enumerate() {
        if record.len() != n_features + 2 {
            bail!(
                "CSV row {row_no}: expected {} fields, got {}",
                n_features + 2,
                record.len()
            );
        }
        let label = Diagnosis::parse_text(&record[1])
            .with_context(|| format!("CSV row {row_no}: '{}' is not B or M", &record[1]))?;
        labels.push(label);
        for (j, column) in values.iter_mut().enumerate() {
            column.push(parse_feature(&record[j + 2], row_no, &names[j])?);
        }
    }

    build_table(names, values, labels)
}

fn read_headered(records: &[StringRecord]) -> Result<FeatureTable> {
    let headers: Vec<String> = records[0].iter().map(|h| h.to_string()).collect();

    let (label_idx, label_kind) = find_label_column(headers.iter().map(String::as_str))
        .context("CSV missing 'target' or 'diagnosis' column")?;

    let feature_cols: Vec<usize> = (0..headers.len())
        .filter(|&i| i != label_idx && !is_ignored_column(&headers[i]))
        .collect();
    let names: Vec<String> = feature_cols.iter().map(|&i| headers[i].clone()).collect();

    let rows = &records[1..];
    let mut values: Vec<Vec<f64>> = vec![Vec::with_capacity(rows.len()); feature_cols.len()];
    let mut labels = Vec::with_capacity(rows.len());

    for (i, record) in rows.iter().enumerate() {
        let row_no = i + 1;
        if record.len() != headers.len() {
            bail!(
                "CSV row {row_no}: expected {} fields, got {}",
                headers.len(),
                record.len()
            );
        }
        labels.push(
            label_kind
                .parse(&record[label_idx])
                .with_context(|| format!("CSV row {row_no}: {}", label_kind.name()))?,
        );
        for (column, (&src, name)) in values.iter_mut().zip(feature_cols.iter().zip(&names)) {
            column.push(parse_feature(&record[src], row_no, name)?);
        }
    }

    build_table(names, values, labels)
}

/// Row identifiers and Pandas index leftovers carry no feature data.
fn is_ignored_column(name: &str) -> bool {
    name.is_empty() || name.eq_ignore_ascii_case("id") || name.starts_with("Unnamed:")
}

fn parse_feature(s: &str, row: usize, col: &str) -> Result<f64> {
    let v: f64 = s
        .parse()
        .with_context(|| format!("Row {row}, '{col}': '{s}' is not a number"))?;
    if !v.is_finite() {
        bail!("Row {row}, '{col}': '{s}' is not finite");
    }
    Ok(v)
}

/// Integer codes, tolerating the `1.0` form float exports produce.
fn parse_code(s: &str) -> Result<i64> {
    if let Ok(i) = s.parse::<i64>() {
        return Ok(i);
    }
    match s.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 => Ok(f as i64),
        _ => bail!("'{s}' is not an integer label"),
    }
}

fn feature_names(n: usize) -> Vec<String> {
    if n == FEATURE_NAMES.len() {
        FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
    } else {
        (0..n).map(|i| format!("feature {i}")).collect()
    }
}

fn build_table(names: Vec<String>, values: Vec<Vec<f64>>, labels: Vec<Diagnosis>) -> Result<FeatureTable> {
    let columns = names
        .into_iter()
        .zip(values)
        .map(|(name, values)| FeatureColumn::new(name, values))
        .collect();
    FeatureTable::new(columns, labels)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file holding one row per sample.
///
/// Expected schema:
/// - numeric columns (Float64, Float32, Int32, Int64) – features
/// - `target` (integer, scikit-learn encoding) or `diagnosis` (text only) – label
/// - an `id` column and any non-numeric columns are skipped
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<FeatureTable> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut names: Option<Vec<String>> = None;
    let mut values: Vec<Vec<f64>> = Vec::new();
    let mut labels = Vec::new();
    let mut row_offset = 0usize;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();
        let n_rows = batch.num_rows();

        let (label_idx, label_kind) =
            find_label_column(schema.fields().iter().map(|f| f.name().as_str()))
                .context("Parquet file missing 'target' or 'diagnosis' column")?;

        let feature_cols: Vec<(usize, String)> = schema
            .fields()
            .iter()
            .enumerate()
            .filter(|(i, f)| {
                *i != label_idx && !is_ignored_column(f.name()) && is_numeric(f.data_type())
            })
            .map(|(i, f)| (i, f.name().clone()))
            .collect();

        let batch_names: Vec<String> = feature_cols.iter().map(|(_, n)| n.clone()).collect();
        match &names {
            None => {
                values = vec![Vec::new(); batch_names.len()];
                names = Some(batch_names);
            }
            Some(existing) if *existing != batch_names => {
                bail!("record batches disagree on feature columns");
            }
            Some(_) => {}
        }

        let label_col = batch.column(label_idx);
        for row in 0..n_rows {
            let label = extract_label(label_col, row, label_kind).with_context(|| {
                format!("Row {}: failed to read {}", row_offset + row, label_kind.name())
            })?;
            labels.push(label);
        }

        for (column, (col_idx, col_name)) in values.iter_mut().zip(&feature_cols) {
            let arr = batch.column(*col_idx);
            for row in 0..n_rows {
                let v = extract_f64(arr, row)
                    .with_context(|| format!("Row {}, '{col_name}'", row_offset + row))?;
                column.push(v);
            }
        }

        row_offset += n_rows;
    }

    build_table(names.unwrap_or_default(), values, labels)
}

// -- Parquet / Arrow helpers --

fn is_numeric(dt: &DataType) -> bool {
    matches!(
        dt,
        DataType::Float64 | DataType::Float32 | DataType::Int32 | DataType::Int64
    )
}

/// Extract a finite `f64` from a numeric column at the given row.
fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in feature column");
    }
    let v = match col.data_type() {
        DataType::Float64 => downcast::<Float64Array>(col)?.value(row),
        DataType::Float32 => downcast::<Float32Array>(col)?.value(row) as f64,
        DataType::Int32 => downcast::<Int32Array>(col)?.value(row) as f64,
        DataType::Int64 => downcast::<Int64Array>(col)?.value(row) as f64,
        other => bail!("Expected a numeric column, got {other:?}"),
    };
    if !v.is_finite() {
        bail!("non-finite value {v}");
    }
    Ok(v)
}

/// Extract the diagnosis from an integer, float or string label column.
fn extract_label(col: &Arc<dyn Array>, row: usize, kind: LabelColumn) -> Result<Diagnosis> {
    if col.is_null(row) {
        bail!("null label");
    }
    match col.data_type() {
        DataType::Int32 => kind.decode(downcast::<Int32Array>(col)?.value(row) as i64),
        DataType::Int64 => kind.decode(downcast::<Int64Array>(col)?.value(row)),
        DataType::Float64 => {
            let v = downcast::<Float64Array>(col)?.value(row);
            if v.fract() != 0.0 {
                bail!("label {v} is not an integer code");
            }
            kind.decode(v as i64)
        }
        DataType::Utf8 => kind.parse(downcast::<StringArray>(col)?.value(row)),
        DataType::LargeUtf8 => kind.parse(col.as_string::<i64>().value(row)),
        other => bail!("Unsupported label column type {other:?}"),
    }
}

fn downcast<T: 'static>(col: &Arc<dyn Array>) -> Result<&T> {
    col.as_any()
        .downcast_ref::<T>()
        .with_context(|| format!("unexpected array type {:?}", col.data_type()))
}
