use std::collections::BTreeSet;
use std::fmt;

use super::loader::LoadError;

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Binary launch outcome (`class` column: 1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Interpret a raw `class` cell. Only exact 0 and 1 are accepted.
    pub fn from_class(class: f64) -> Option<Self> {
        if class == 1.0 {
            Some(Outcome::Success)
        } else if class == 0.0 {
            Some(Outcome::Failure)
        } else {
            None
        }
    }

    /// The numeric `class` value, used as the scatter y coordinate.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the input table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Payload mass in kilograms, finite and non-negative.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

// ---------------------------------------------------------------------------
// PayloadRange – inclusive [low, high] interval in kg
// ---------------------------------------------------------------------------

/// Inclusive payload interval. `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Build a range, swapping the bounds if they arrive reversed.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            PayloadRange { low: a, high: b }
        } else {
            PayloadRange { low: b, high: a }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with its pre-computed summaries.
///
/// Built once at startup and shared read-only behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct site names in order of first appearance.
    launch_sites: Vec<String>,
    /// Distinct booster categories, sorted.
    booster_categories: BTreeSet<String>,
    payload_bounds: PayloadRange,
}

impl LaunchDataset {
    /// Build the summaries from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, LoadError> {
        let first = records.first().ok_or(LoadError::Empty)?;
        let mut min = first.payload_mass_kg;
        let mut max = first.payload_mass_kg;

        let mut launch_sites: Vec<String> = Vec::new();
        let mut booster_categories = BTreeSet::new();

        for rec in &records {
            min = min.min(rec.payload_mass_kg);
            max = max.max(rec.payload_mass_kg);
            if !launch_sites.contains(&rec.launch_site) {
                launch_sites.push(rec.launch_site.clone());
            }
            booster_categories.insert(rec.booster_version_category.clone());
        }

        Ok(LaunchDataset {
            records,
            launch_sites,
            booster_categories,
            payload_bounds: PayloadRange::new(min, max),
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn launch_sites(&self) -> &[String] {
        &self.launch_sites
    }

    pub fn booster_categories(&self) -> &BTreeSet<String> {
        &self.booster_categories
    }

    /// `[min, max]` payload over every record.
    pub fn payload_bounds(&self) -> PayloadRange {
        self.payload_bounds
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(site: &str, payload: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version_category: booster.to_string(),
        }
    }

    /// The three-record dataset used throughout the query tests.
    pub(crate) fn small_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("SiteA", 500.0, Outcome::Success, "v1.0"),
            record("SiteA", 1500.0, Outcome::Failure, "FT"),
            record("SiteB", 2000.0, Outcome::Success, "FT"),
        ])
        .unwrap()
    }

    #[test]
    fn summaries_are_computed_on_load() {
        let ds = LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 2500.0, Outcome::Failure, "v1.1"),
            record("VAFB SLC-4E", 9600.0, Outcome::Success, "FT"),
            record("CCAFS LC-40", 0.0, Outcome::Success, "B4"),
            record("KSC LC-39A", 5300.0, Outcome::Success, "FT"),
        ])
        .unwrap();

        assert_eq!(ds.len(), 4);
        assert_eq!(
            ds.launch_sites(),
            ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]
        );
        assert_eq!(
            ds.booster_categories().iter().collect::<Vec<_>>(),
            ["B4", "FT", "v1.1"]
        );
        assert_eq!(ds.payload_bounds(), PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = LaunchDataset::from_records(Vec::new()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn outcome_from_class() {
        assert_eq!(Outcome::from_class(1.0), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0.0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(0.5), None);
        assert_eq!(Outcome::from_class(2.0), None);
        assert_eq!(Outcome::Success.class(), 1);
        assert_eq!(Outcome::Failure.class(), 0);
    }

    #[test]
    fn payload_range_is_inclusive_and_ordered() {
        let range = PayloadRange::new(4000.0, 1000.0);
        assert_eq!(range.low(), 1000.0);
        assert_eq!(range.high(), 4000.0);
        assert!(range.contains(1000.0));
        assert!(range.contains(4000.0));
        assert!(!range.contains(999.9));
        assert!(!range.contains(4000.1));
    }
}
