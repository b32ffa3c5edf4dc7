use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::print_batches;
use parquet::arrow::ArrowWriter;

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

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster category, payload span (kg) and success probability.
const BOOSTERS: [(&str, f64, f64, f64); 5] = [
    ("v1.0", 0.0, 700.0, 0.2),
    ("v1.1", 400.0, 4500.0, 0.1),
    ("FT", 2000.0, 9600.0, 0.7),
    ("B4", 2000.0, 7000.0, 0.55),
    ("B5", 3000.0, 9600.0, 0.9),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

const ROWS: usize = 56;

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let mut flight: Vec<i64> = Vec::with_capacity(ROWS);
    let mut site: Vec<&str> = Vec::with_capacity(ROWS);
    let mut payload: Vec<f64> = Vec::with_capacity(ROWS);
    let mut class: Vec<i64> = Vec::with_capacity(ROWS);
    let mut booster: Vec<&str> = Vec::with_capacity(ROWS);

    for i in 0..ROWS {
        // Older boosters fly first, roughly as in the real manifest.
        let era = (i * BOOSTERS.len() / ROWS).min(BOOSTERS.len() - 1);
        let (category, lo, hi, p_success) = if rng.next_f64() < 0.8 {
            BOOSTERS[era]
        } else {
            *rng.pick(&BOOSTERS)
        };

        flight.push(i as i64 + 1);
        site.push(*rng.pick(&SITES));
        payload.push((lo + rng.next_f64() * (hi - lo)).round());
        class.push(i64::from(rng.next_f64() < p_success));
        booster.push(category);
    }

    // CSV, in the column order of the public dataset
    let csv_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(csv_path)?;
    writer.write_record([
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version Category",
    ])?;
    for i in 0..ROWS {
        writer.write_record([
            flight[i].to_string(),
            site[i].to_string(),
            class[i].to_string(),
            payload[i].to_string(),
            booster[i].to_string(),
        ])?;
    }
    writer.flush()?;

    // Parquet
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(flight)),
            Arc::new(StringArray::from(site)),
            Arc::new(Int64Array::from(class)),
            Arc::new(Float64Array::from(payload)),
            Arc::new(StringArray::from(booster)),
        ],
    )?;

    let parquet_path = "spacex_launch_dash.parquet";
    let file = std::fs::File::create(parquet_path)?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;

    print_batches(&[batch.slice(0, 5)])?;
    println!("Wrote {ROWS} launches to {csv_path} and {parquet_path}");
    Ok(())
}
