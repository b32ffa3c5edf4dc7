use std::fmt;

use super::model::{LaunchDataset, LaunchRecord, PayloadRange};

/// Label (and control value) of the aggregate site option.
pub const ALL_SITES: &str = "All Sites";

// ---------------------------------------------------------------------------
// Site selection: the value held by the site picker
// ---------------------------------------------------------------------------

/// Either every site or one exact site name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Map a raw picker value to a selection. Only the exact `"All Sites"`
    /// label selects the aggregate view; anything else is a site name.
    pub fn from_control_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Picker options: the aggregate entry followed by each site in dataset order.
    pub fn options(dataset: &LaunchDataset) -> Vec<SiteSelection> {
        std::iter::once(SiteSelection::All)
            .chain(
                dataset
                    .launch_sites()
                    .iter()
                    .map(|site| SiteSelection::Site(site.clone())),
            )
            .collect()
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => record.launch_site == *name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{ALL_SITES}"),
            SiteSelection::Site(name) => write!(f, "{name}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record predicates
// ---------------------------------------------------------------------------

/// Records belonging to the selected site(s), in dataset order.
pub fn records_for_site<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset.records().iter().filter(move |rec| site.matches(rec))
}

/// Records of the selected site(s) whose payload lies in `range` (inclusive).
pub fn records_in_payload_range<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    records_for_site(dataset, site).filter(move |rec| range.contains(rec.payload_mass_kg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::small_dataset;

    #[test]
    fn control_value_mapping() {
        assert_eq!(SiteSelection::from_control_value("All Sites"), SiteSelection::All);
        assert_eq!(
            SiteSelection::from_control_value("SiteA"),
            SiteSelection::Site("SiteA".into())
        );
        // The placeholder text is never a selectable value, so it is just a name.
        assert_eq!(
            SiteSelection::from_control_value("None"),
            SiteSelection::Site("None".into())
        );
    }

    #[test]
    fn options_start_with_all_sites() {
        let ds = small_dataset();
        let labels: Vec<String> = SiteSelection::options(&ds)
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(labels, ["All Sites", "SiteA", "SiteB"]);
    }

    #[test]
    fn site_and_payload_filters_intersect() {
        let ds = small_dataset();
        let site_a = SiteSelection::Site("SiteA".into());

        assert_eq!(records_for_site(&ds, &site_a).count(), 2);
        assert_eq!(records_for_site(&ds, &SiteSelection::All).count(), 3);

        let range = PayloadRange::new(1000.0, 2000.0);
        let payloads: Vec<f64> = records_in_payload_range(&ds, &site_a, range)
            .map(|r| r.payload_mass_kg)
            .collect();
        assert_eq!(payloads, [1500.0]);
        assert_eq!(
            records_in_payload_range(&ds, &SiteSelection::All, range).count(),
            2
        );
    }
}
