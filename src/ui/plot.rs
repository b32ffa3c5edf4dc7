use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Sense, Shape, Stroke, Ui, pos2, vec2};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::charts::PieChart;
use crate::data::filter::SiteSelection;
use crate::state::AppState;

const SUCCESS_COLOR: Color32 = Color32::from_rgb(46, 160, 67);
const FAILURE_COLOR: Color32 = Color32::from_rgb(214, 69, 65);

/// Arc resolution for pie wedges.
const ARC_STEP: f32 = TAU / 180.0;

// ---------------------------------------------------------------------------
// Success pie (upper half of the central panel)
// ---------------------------------------------------------------------------

pub fn success_pie(ui: &mut Ui, state: &AppState) {
    let Some(chart) = state.dashboard.pie_chart() else {
        return;
    };
    ui.heading(&chart.title);

    let colors: Vec<Color32> = chart
        .slices
        .iter()
        .map(|slice| match state.dashboard.controls().site {
            SiteSelection::All => state.site_colors.color_for(&slice.label),
            SiteSelection::Site(_) if slice.label == "Success" => SUCCESS_COLOR,
            SiteSelection::Site(_) => FAILURE_COLOR,
        })
        .collect();

    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();

    let total = chart.total();
    if total == 0 {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No launches match the selection",
            FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let legend_width = 220.0;
    let radius = (((rect.width() - legend_width).min(rect.height())) / 2.0 - 8.0).max(12.0);
    let center = pos2(rect.left() + 8.0 + radius, rect.center().y);

    let mut start = -FRAC_PI_2;
    for (slice, &color) in chart.slices.iter().zip(&colors) {
        let sweep = TAU * slice.value as f32 / total as f32;
        paint_wedge(&painter, center, radius, start, sweep, color);

        let mid = start + sweep / 2.0;
        let label_pos = center + vec2(mid.cos(), mid.sin()) * radius * 0.65;
        let percent = 100.0 * slice.value as f32 / total as f32;
        painter.text(
            label_pos,
            Align2::CENTER_CENTER,
            format!("{percent:.1}%"),
            FontId::proportional(13.0),
            Color32::WHITE,
        );
        start += sweep;
    }

    // ---- Legend ----
    let legend_x = center.x + radius + 24.0;
    for (i, (slice, &color)) in chart.slices.iter().zip(&colors).enumerate() {
        let y = rect.top() + 12.0 + i as f32 * 20.0;
        painter.rect_filled(
            egui::Rect::from_min_size(pos2(legend_x, y), vec2(12.0, 12.0)),
            2.0,
            color,
        );
        painter.text(
            pos2(legend_x + 18.0, y + 6.0),
            Align2::LEFT_CENTER,
            format!("{} ({})", slice.label, slice.value),
            FontId::proportional(13.0),
            text_color,
        );
    }

    // ---- Hover ----
    if let Some(pos) = response.hover_pos() {
        let offset = pos - center;
        if offset.length() <= radius {
            let angle = (offset.y.atan2(offset.x) + FRAC_PI_2).rem_euclid(TAU);
            if let Some(idx) = slice_at_angle(chart, angle) {
                let slice = &chart.slices[idx];
                response.on_hover_text_at_pointer(format!("{}: {}", slice.label, slice.value));
            }
        }
    }
}

/// Every distinct site plotted at exactly `value` in the `category` series.
fn sites_at<'a>(
    hover: &'a [(String, f64, f64, String)],
    category: &str,
    value: &PlotPoint,
) -> Vec<&'a str> {
    let mut sites: Vec<&str> = Vec::new();
    for (c, x, y, site) in hover {
        if c == category && *x == value.x && *y == value.y && !sites.contains(&site.as_str()) {
            sites.push(site);
        }
    }
    sites
}

/// Index of the slice covering `angle` (radians clockwise from 12 o'clock).
fn slice_at_angle(chart: &PieChart, angle: f32) -> Option<usize> {
    let total = chart.total();
    if total == 0 {
        return None;
    }
    let mut end = 0.0;
    for (i, slice) in chart.slices.iter().enumerate() {
        end += TAU * slice.value as f32 / total as f32;
        if angle < end {
            return Some(i);
        }
    }
    // Rounding can leave `end` a hair short of TAU.
    chart.slices.len().checked_sub(1)
}

/// Fill a wedge as a fan of convex polygons (each at most a quarter turn).
fn paint_wedge(painter: &Painter, center: Pos2, radius: f32, start: f32, sweep: f32, color: Color32) {
    let mut chunk_start = start;
    let end = start + sweep;
    while chunk_start < end {
        let chunk_end = (chunk_start + FRAC_PI_2).min(end);
        let steps = ((chunk_end - chunk_start) / ARC_STEP).ceil().max(1.0) as usize;
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for s in 0..=steps {
            let a = chunk_start + (chunk_end - chunk_start) * s as f32 / steps as f32;
            points.push(center + vec2(a.cos(), a.sin()) * radius);
        }
        painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
        chunk_start = chunk_end;
    }
    let edge = center + vec2(start.cos(), start.sin()) * radius;
    painter.line_segment([center, edge], Stroke::new(1.0, Color32::from_gray(30)));
}

// ---------------------------------------------------------------------------
// Payload scatter (lower half of the central panel)
// ---------------------------------------------------------------------------

pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    let Some(chart) = state.dashboard.scatter_chart() else {
        return;
    };
    ui.heading(&chart.title);

    let range = state.dashboard.controls().payload;

    // Hover lookup: (category, x, y, site) for every plotted point.
    let hover: Vec<(String, f64, f64, String)> = chart
        .points
        .iter()
        .map(|p| {
            (
                p.booster_version_category.clone(),
                p.payload_mass_kg,
                f64::from(p.outcome.class()),
                p.launch_site.clone(),
            )
        })
        .collect();

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(range.low())
        .include_x(range.high())
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |name: &str, value: &PlotPoint| {
            if name.is_empty() {
                return format!("{:.0} kg", value.x);
            }
            let site = sites_at(&hover, name, value).join(", ");
            format!(
                "{name}\nPayload Mass (kg): {:.0}\nclass: {:.0}\nLaunch Site: {site}",
                value.x, value.y
            )
        })
        .show(ui, |plot_ui| {
            for (category, points) in chart.series() {
                let xy: PlotPoints = points
                    .iter()
                    .map(|p| [p.payload_mass_kg, f64::from(p.outcome.class())])
                    .collect();
                plot_ui.points(
                    Points::new(xy)
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}
