// Compile-time settings. The dashboard takes no flags or environment
// variables; `RUST_LOG` is read by the logger only.

/// Dataset read once at startup, relative to the working directory.
pub const DATASET_PATH: &str = "spacex_launch_dash.csv";

pub const WINDOW_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const WINDOW_SIZE: [f32; 2] = [1200.0, 860.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [700.0, 500.0];

/// Payload control span and step, in kg.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;
