use std::path::Path;
use std::sync::Arc;

use crate::color::ColorMap;
use crate::data::filter::SiteSelection;
use crate::data::model::{LaunchDataset, PayloadRange};
use crate::reactive::Dashboard;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Controls and the latest chart for each output.
    pub dashboard: Dashboard,

    /// Site picker values: "All Sites" followed by each site name.
    pub site_options: Vec<String>,

    /// Slider handles as the user drags them; pushed into the dashboard
    /// as an ordered range.
    pub payload_low: f64,
    pub payload_high: f64,

    /// Scatter colours, one per booster category.
    pub booster_colors: ColorMap,

    /// Pie colours for the per-site view.
    pub site_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Arc<LaunchDataset>) -> Self {
        let site_options = SiteSelection::options(&dataset)
            .iter()
            .map(|site| site.to_string())
            .collect();
        let booster_colors = ColorMap::new(dataset.booster_categories());
        let site_colors = ColorMap::new(dataset.launch_sites());
        let bounds = dataset.payload_bounds();

        Self {
            dashboard: Dashboard::new(dataset),
            site_options,
            payload_low: bounds.low(),
            payload_high: bounds.high(),
            booster_colors,
            site_colors,
            status_message: None,
        }
    }

    /// Apply a value picked in the site dropdown.
    pub fn select_site(&mut self, value: &str) {
        self.dashboard
            .set_site(SiteSelection::from_control_value(value));
    }

    /// Push the slider handles into the dashboard, keeping them ordered.
    pub fn apply_payload_handles(&mut self) {
        if self.payload_low > self.payload_high {
            std::mem::swap(&mut self.payload_low, &mut self.payload_high);
        }
        self.dashboard
            .set_payload_range(PayloadRange::new(self.payload_low, self.payload_high));
    }

    /// Number of launches behind the current scatter chart.
    pub fn visible_count(&self) -> usize {
        self.dashboard
            .scatter_chart()
            .map_or(0, |chart| chart.points.len())
    }

    /// Write the current scatter rows to `path`, reporting the outcome in the
    /// status line.
    pub fn export_visible(&mut self, path: &Path) {
        let Some(chart) = self.dashboard.scatter_chart() else {
            return;
        };
        match crate::data::export::write_points_csv(&chart.points, path) {
            Ok(()) => {
                self.status_message = Some(format!(
                    "Exported {} launches to {}",
                    chart.points.len(),
                    path.display()
                ));
            }
            Err(e) => {
                log::error!("Failed to export launches: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
