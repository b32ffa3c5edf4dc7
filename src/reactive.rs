//! Control → output wiring.
//!
//! Every chart is produced by a handler registered in [`CALLBACKS`] together
//! with the controls it reads. When a control changes, each callback listing
//! that control is re-run against the shared dataset.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::charts::{PieChart, ScatterChart, payload_scatter_chart, success_pie_chart};
use crate::data::filter::SiteSelection;
use crate::data::model::{LaunchDataset, PayloadRange};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputId {
    SuccessPieChart,
    PayloadScatterChart,
}

/// Current value of every input control.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlValues {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl ControlValues {
    /// "All Sites" and the full payload span of the dataset.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        ControlValues {
            site: SiteSelection::All,
            payload: dataset.payload_bounds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Pie(PieChart),
    Scatter(ScatterChart),
}

pub type Handler = fn(&LaunchDataset, &ControlValues) -> Figure;

/// One registered output: its handler and the controls it depends on.
pub struct Callback {
    pub output: OutputId,
    pub inputs: &'static [ControlId],
    pub handler: Handler,
}

pub static CALLBACKS: &[Callback] = &[
    Callback {
        output: OutputId::SuccessPieChart,
        inputs: &[ControlId::SiteDropdown],
        handler: |dataset, controls| Figure::Pie(success_pie_chart(dataset, &controls.site)),
    },
    Callback {
        output: OutputId::PayloadScatterChart,
        inputs: &[ControlId::SiteDropdown, ControlId::PayloadSlider],
        handler: |dataset, controls| {
            Figure::Scatter(payload_scatter_chart(dataset, &controls.site, controls.payload))
        },
    },
];

// ---------------------------------------------------------------------------
// Dashboard: controls + latest figures
// ---------------------------------------------------------------------------

/// Holds the control values and the most recent figure for every output.
pub struct Dashboard {
    dataset: Arc<LaunchDataset>,
    controls: ControlValues,
    figures: BTreeMap<OutputId, Figure>,
}

impl Dashboard {
    /// Start from the initial control values and evaluate every output once.
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        let controls = ControlValues::initial(&dataset);
        let figures = CALLBACKS
            .iter()
            .map(|cb| (cb.output, (cb.handler)(&dataset, &controls)))
            .collect();
        Dashboard {
            dataset,
            controls,
            figures,
        }
    }

    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    pub fn controls(&self) -> &ControlValues {
        &self.controls
    }

    /// Change the site picker. Returns the outputs that were re-evaluated.
    pub fn set_site(&mut self, site: SiteSelection) -> Vec<OutputId> {
        if self.controls.site == site {
            return Vec::new();
        }
        self.controls.site = site;
        self.dispatch(ControlId::SiteDropdown)
    }

    /// Change the payload range. Returns the outputs that were re-evaluated.
    pub fn set_payload_range(&mut self, range: PayloadRange) -> Vec<OutputId> {
        if self.controls.payload == range {
            return Vec::new();
        }
        self.controls.payload = range;
        self.dispatch(ControlId::PayloadSlider)
    }

    fn dispatch(&mut self, changed: ControlId) -> Vec<OutputId> {
        let mut updated = Vec::new();
        for cb in CALLBACKS.iter().filter(|cb| cb.inputs.contains(&changed)) {
            let figure = (cb.handler)(&self.dataset, &self.controls);
            self.figures.insert(cb.output, figure);
            updated.push(cb.output);
        }
        log::debug!("{changed:?} changed to {:?}, re-evaluated {updated:?}", self.controls);
        updated
    }

    pub fn figure(&self, output: OutputId) -> Option<&Figure> {
        self.figures.get(&output)
    }

    pub fn pie_chart(&self) -> Option<&PieChart> {
        match self.figure(OutputId::SuccessPieChart)? {
            Figure::Pie(chart) => Some(chart),
            _ => None,
        }
    }

    pub fn scatter_chart(&self) -> Option<&ScatterChart> {
        match self.figure(OutputId::PayloadScatterChart)? {
            Figure::Scatter(chart) => Some(chart),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::small_dataset;

    fn dashboard() -> Dashboard {
        Dashboard::new(Arc::new(small_dataset()))
    }

    #[test]
    fn every_output_registered_once() {
        let mut outputs: Vec<OutputId> = CALLBACKS.iter().map(|cb| cb.output).collect();
        outputs.sort();
        outputs.dedup();
        assert_eq!(outputs.len(), CALLBACKS.len());
    }

    #[test]
    fn initial_state_shows_everything() {
        let dash = dashboard();
        assert_eq!(dash.controls().site, SiteSelection::All);
        assert_eq!(dash.controls().payload, PayloadRange::new(500.0, 2000.0));
        assert_eq!(dash.pie_chart().unwrap().total(), 2);
        assert_eq!(dash.scatter_chart().unwrap().points.len(), 3);
    }

    #[test]
    fn site_change_updates_both_charts() {
        let mut dash = dashboard();
        let updated = dash.set_site(SiteSelection::Site("SiteA".into()));

        assert_eq!(
            updated,
            [OutputId::SuccessPieChart, OutputId::PayloadScatterChart]
        );
        assert_eq!(
            dash.pie_chart().unwrap().title,
            "Total Success Launches for Site SiteA"
        );
        assert_eq!(dash.scatter_chart().unwrap().points.len(), 2);
    }

    #[test]
    fn payload_change_updates_only_scatter() {
        let mut dash = dashboard();
        let pie_before = dash.pie_chart().cloned();

        let updated = dash.set_payload_range(PayloadRange::new(0.0, 1000.0));

        assert_eq!(updated, [OutputId::PayloadScatterChart]);
        assert_eq!(dash.pie_chart().cloned(), pie_before);
        assert_eq!(dash.scatter_chart().unwrap().points.len(), 1);
    }

    #[test]
    fn unchanged_value_dispatches_nothing() {
        let mut dash = dashboard();
        assert!(dash.set_site(SiteSelection::All).is_empty());
        assert!(dash.set_payload_range(PayloadRange::new(500.0, 2000.0)).is_empty());
    }
}
