use std::collections::BTreeMap;

use crate::data::filter::{SiteSelection, records_for_site, records_in_payload_range};
use crate::data::model::{LaunchDataset, Outcome, PayloadRange};

// ---------------------------------------------------------------------------
// Chart descriptions
// ---------------------------------------------------------------------------

/// One wedge of a proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

/// Proportion chart: slices are drawn in order, sized by `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One launch plotted as payload (x) against outcome (y).
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Colour key.
    pub booster_version_category: String,
    /// Hover metadata.
    pub launch_site: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    /// Points grouped by booster category (one legend entry each).
    pub fn series(&self) -> BTreeMap<&str, Vec<&ScatterPoint>> {
        let mut series: BTreeMap<&str, Vec<&ScatterPoint>> = BTreeMap::new();
        for point in &self.points {
            series
                .entry(point.booster_version_category.as_str())
                .or_default()
                .push(point);
        }
        series
    }
}

// ---------------------------------------------------------------------------
// Success proportion
// ---------------------------------------------------------------------------

/// Success counts per site (all sites), or success vs. failure for one site.
///
/// Zero-sized slices are omitted in both views.
pub fn success_pie_chart(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => {
            let slices = dataset
                .launch_sites()
                .iter()
                .map(|name| PieSlice {
                    label: name.clone(),
                    value: dataset
                        .records()
                        .iter()
                        .filter(|r| r.outcome.is_success() && r.launch_site == *name)
                        .count(),
                })
                .filter(|slice| slice.value > 0)
                .collect();
            PieChart {
                title: "Total Success Launches by Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let (successes, failures) =
                records_for_site(dataset, site).fold((0, 0), |(s, f), rec| match rec.outcome {
                    Outcome::Success => (s + 1, f),
                    Outcome::Failure => (s, f + 1),
                });
            let slices = [(Outcome::Success, successes), (Outcome::Failure, failures)]
                .into_iter()
                .filter(|&(_, value)| value > 0)
                .map(|(outcome, value)| PieSlice {
                    label: outcome.to_string(),
                    value,
                })
                .collect();
            PieChart {
                title: format!("Total Success Launches for Site {name}"),
                slices,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Payload vs. outcome
// ---------------------------------------------------------------------------

/// Launches with payload in `range` (inclusive), optionally for one site only.
pub fn payload_scatter_chart(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let points = records_in_payload_range(dataset, site, range)
        .map(|rec| ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            outcome: rec.outcome,
            booster_version_category: rec.booster_version_category.clone(),
            launch_site: rec.launch_site.clone(),
        })
        .collect();

    let title = match site {
        SiteSelection::All => "Correlation Between Payload and Success for All Sites".to_string(),
        SiteSelection::Site(name) => {
            format!("Correlation Between Payload and Success for Site {name}")
        }
    };

    ScatterChart { title, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::{record, small_dataset};

    fn slices(chart: &PieChart) -> Vec<(&str, usize)> {
        chart
            .slices
            .iter()
            .map(|s| (s.label.as_str(), s.value))
            .collect()
    }

    fn mixed_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 0.0, Outcome::Failure, "v1.0"),
            record("CCAFS LC-40", 525.0, Outcome::Success, "v1.0"),
            record("VAFB SLC-4E", 500.0, Outcome::Failure, "v1.1"),
            record("KSC LC-39A", 2490.0, Outcome::Success, "FT"),
            record("KSC LC-39A", 5300.0, Outcome::Success, "FT"),
            record("CCAFS SLC-40", 3600.0, Outcome::Success, "B4"),
            record("CCAFS SLC-40", 9600.0, Outcome::Failure, "B5"),
            record("VAFB SLC-4E", 9600.0, Outcome::Failure, "FT"),
        ])
        .unwrap()
    }

    #[test]
    fn pie_all_sites_counts_successes_per_site() {
        let chart = success_pie_chart(&small_dataset(), &SiteSelection::All);
        assert_eq!(chart.title, "Total Success Launches by Site");
        assert_eq!(slices(&chart), [("SiteA", 1), ("SiteB", 1)]);
    }

    #[test]
    fn pie_single_site_splits_by_outcome() {
        let site = SiteSelection::Site("SiteA".into());
        let chart = success_pie_chart(&small_dataset(), &site);
        assert_eq!(chart.title, "Total Success Launches for Site SiteA");
        assert_eq!(slices(&chart), [("Success", 1), ("Failure", 1)]);
    }

    #[test]
    fn pie_omits_zero_slices() {
        let ds = mixed_dataset();

        // VAFB SLC-4E never succeeds.
        let all = success_pie_chart(&ds, &SiteSelection::All);
        assert_eq!(
            slices(&all),
            [("CCAFS LC-40", 1), ("KSC LC-39A", 2), ("CCAFS SLC-40", 1)]
        );

        let vafb = success_pie_chart(&ds, &SiteSelection::Site("VAFB SLC-4E".into()));
        assert_eq!(slices(&vafb), [("Failure", 2)]);
    }

    #[test]
    fn pie_unknown_site_is_empty() {
        let chart = success_pie_chart(&small_dataset(), &SiteSelection::Site("None".into()));
        assert!(chart.slices.is_empty());
        assert_eq!(chart.total(), 0);
    }

    #[test]
    fn pie_totals_match_filtered_records() {
        let ds = mixed_dataset();
        let successes = ds.records().iter().filter(|r| r.outcome.is_success()).count();
        assert_eq!(success_pie_chart(&ds, &SiteSelection::All).total(), successes);

        for site in SiteSelection::options(&ds).into_iter().skip(1) {
            let expected = records_for_site(&ds, &site).count();
            assert_eq!(success_pie_chart(&ds, &site).total(), expected, "{site}");
        }
    }

    #[test]
    fn scatter_examples() {
        let ds = small_dataset();

        let wide = payload_scatter_chart(&ds, &SiteSelection::All, PayloadRange::new(0.0, 10000.0));
        assert_eq!(wide.title, "Correlation Between Payload and Success for All Sites");
        assert_eq!(wide.points.len(), 3);

        let narrow = payload_scatter_chart(&ds, &SiteSelection::All, PayloadRange::new(0.0, 1000.0));
        assert_eq!(
            narrow.points,
            [ScatterPoint {
                payload_mass_kg: 500.0,
                outcome: Outcome::Success,
                booster_version_category: "v1.0".into(),
                launch_site: "SiteA".into(),
            }]
        );
    }

    #[test]
    fn scatter_counts_match_filters() {
        let ds = mixed_dataset();
        let ranges = [
            PayloadRange::new(0.0, 0.0),
            PayloadRange::new(500.0, 525.0),
            PayloadRange::new(1000.0, 5000.0),
            PayloadRange::new(9600.0, 10000.0),
            PayloadRange::new(0.0, 10000.0),
        ];

        for site in SiteSelection::options(&ds) {
            for range in ranges {
                let expected = ds
                    .records()
                    .iter()
                    .filter(|r| site.matches(r) && range.contains(r.payload_mass_kg))
                    .count();
                let chart = payload_scatter_chart(&ds, &site, range);
                assert_eq!(chart.points.len(), expected, "{site} {range:?}");
            }
        }
    }

    #[test]
    fn scatter_default_range_covers_everything() {
        let ds = mixed_dataset();
        let bounds = ds.payload_bounds();

        for site in SiteSelection::options(&ds) {
            let chart = payload_scatter_chart(&ds, &site, bounds);
            assert_eq!(chart.points.len(), records_for_site(&ds, &site).count());
        }
    }

    #[test]
    fn scatter_site_title_and_empty_result() {
        let ds = mixed_dataset();
        let site = SiteSelection::Site("KSC LC-39A".into());

        let chart = payload_scatter_chart(&ds, &site, PayloadRange::new(6000.0, 8000.0));
        assert_eq!(
            chart.title,
            "Correlation Between Payload and Success for Site KSC LC-39A"
        );
        assert!(chart.points.is_empty());
        assert!(chart.series().is_empty());
    }

    #[test]
    fn scatter_series_grouped_by_booster() {
        let ds = mixed_dataset();
        let chart = payload_scatter_chart(&ds, &SiteSelection::All, ds.payload_bounds());
        let series = chart.series();

        assert_eq!(
            series.keys().copied().collect::<Vec<_>>(),
            ["B4", "B5", "FT", "v1.0", "v1.1"]
        );
        assert_eq!(series["FT"].len(), 3);
    }

    #[test]
    fn queries_are_idempotent() {
        let ds = mixed_dataset();
        let site = SiteSelection::Site("CCAFS LC-40".into());
        let range = PayloadRange::new(0.0, 3000.0);

        assert_eq!(success_pie_chart(&ds, &site), success_pie_chart(&ds, &site));
        assert_eq!(
            payload_scatter_chart(&ds, &site, range),
            payload_scatter_chart(&ds, &site, range)
        );
    }
}
