use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{Array, ArrayRef, AsArray, Float64Array, StringArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

pub const LAUNCH_SITE: &str = "Launch Site";
pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const CLASS: &str = "class";
pub const BOOSTER_CATEGORY: &str = "Booster Version Category";

/// Columns every input file must carry. Any other column is ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = [LAUNCH_SITE, PAYLOAD_MASS, CLASS, BOOSTER_CATEGORY];

/// Validation failures found while turning raw rows into [`LaunchRecord`]s.
///
/// `row` counts data rows from 1, not including the header.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: class must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: f64 },
    #[error("row {row}: payload mass must be a non-negative number, got {value}")]
    InvalidPayload { row: usize, value: f64 },
    #[error("row {row}: null value in column '{column}'")]
    NullValue { row: usize, column: &'static str },
    #[error("dataset contains no launch records")]
    Empty,
}

/// One untyped row as it appears in the file.
#[derive(Debug, Clone, Deserialize)]
struct LaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl LaunchRow {
    fn into_record(self, row: usize) -> Result<LaunchRecord, LoadError> {
        let outcome = Outcome::from_class(self.class).ok_or(LoadError::InvalidOutcome {
            row,
            value: self.class,
        })?;
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(LoadError::InvalidPayload {
                row,
                value: self.payload_mass_kg,
            });
        }
        Ok(LaunchRecord {
            launch_site: self.launch_site,
            payload_mass_kg: self.payload_mass_kg,
            outcome,
            booster_version_category: self.booster_version_category,
        })
    }
}

fn dataset_from_rows(rows: Vec<LaunchRow>) -> Result<LaunchDataset, LoadError> {
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_record(i + 1))
        .collect::<Result<Vec<_>, _>>()?;
    LaunchDataset::from_records(records)
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row naming at least the four schema columns
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – one column per schema field; numeric columns of any width
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "Loaded {} launch records from {} sites, payload {}..={} kg",
        dataset.len(),
        dataset.launch_sites().len(),
        dataset.payload_bounds().low(),
        dataset.payload_bounds().high()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<LaunchDataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column).into());
        }
    }

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<LaunchRow>().enumerate() {
        rows.push(result.with_context(|| format!("CSV row {}", i + 1))?);
    }

    Ok(dataset_from_rows(rows)?)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "Launch Site": "CCAFS LC-40", "Payload Mass (kg)": 525.0,
///     "class": 0, "Booster Version Category": "v1.0" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<LaunchDataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<LaunchRow> = serde_json::from_str(&text).context("parsing JSON")?;
    Ok(dataset_from_rows(rows)?)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by Pandas (`df.to_parquet()`) or Polars.
///
/// Text columns may be Utf8 or LargeUtf8; numeric columns may be any integer
/// or float type. Everything is cast to Utf8 / Float64 before row assembly.
fn load_parquet(path: &Path) -> Result<LaunchDataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let sites = string_column(&batch, LAUNCH_SITE)?;
        let payloads = f64_column(&batch, PAYLOAD_MASS)?;
        let classes = f64_column(&batch, CLASS)?;
        let boosters = string_column(&batch, BOOSTER_CATEGORY)?;

        for i in 0..batch.num_rows() {
            let row = rows.len() + 1;
            let null_in = |array: &dyn Array, column: &'static str| {
                if array.is_null(i) {
                    Err(LoadError::NullValue { row, column })
                } else {
                    Ok(())
                }
            };
            null_in(&sites, LAUNCH_SITE)?;
            null_in(&payloads, PAYLOAD_MASS)?;
            null_in(&classes, CLASS)?;
            null_in(&boosters, BOOSTER_CATEGORY)?;

            rows.push(LaunchRow {
                launch_site: sites.value(i).to_string(),
                payload_mass_kg: payloads.value(i),
                class: classes.value(i),
                booster_version_category: boosters.value(i).to_string(),
            });
        }
    }

    Ok(dataset_from_rows(rows)?)
}

// -- Parquet / Arrow helpers --

fn required_column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a ArrayRef> {
    batch
        .column_by_name(name)
        .ok_or_else(|| LoadError::MissingColumn(name).into())
}

fn string_column(batch: &RecordBatch, name: &'static str) -> Result<StringArray> {
    let col = required_column(batch, name)?;
    let utf8 = cast(col, &DataType::Utf8)
        .with_context(|| format!("column '{name}' cannot be read as text"))?;
    Ok(utf8.as_string::<i32>().clone())
}

fn f64_column(batch: &RecordBatch, name: &'static str) -> Result<Float64Array> {
    let col = required_column(batch, name)?;
    let floats = cast(col, &DataType::Float64)
        .with_context(|| format!("column '{name}' cannot be read as a number"))?;
    Ok(floats.as_primitive::<Float64Type>().clone())
}
