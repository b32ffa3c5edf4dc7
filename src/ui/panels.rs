use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config::{PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the left control panel: site picker, payload range, legend.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Site dropdown ----
    ui.strong("Launch Site");
    let current = state.dashboard.controls().site.to_string();
    let mut chosen: Option<String> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in &state.site_options {
                if ui
                    .selectable_label(current == *option, option)
                    .clicked()
                {
                    chosen = Some(option.clone());
                }
            }
        });
    if let Some(site) = chosen {
        state.select_site(&site);
    }

    ui.add_space(12.0);

    // ---- Payload range ----
    ui.strong("Payload range (Kg)");
    // Clamp and snap only on user edits, so the [min, max] default survives.
    let range = PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX;
    let low_changed = ui
        .add(
            egui::Slider::new(&mut state.payload_low, range.clone())
                .step_by(PAYLOAD_SLIDER_STEP)
                .clamping(egui::SliderClamping::Edits)
                .suffix(" Kg")
                .text("low"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut state.payload_high, range)
                .step_by(PAYLOAD_SLIDER_STEP)
                .clamping(egui::SliderClamping::Edits)
                .suffix(" Kg")
                .text("high"),
        )
        .changed();
    if low_changed || high_changed {
        state.apply_payload_handles();
    }

    if ui.small_button("Reset range").clicked() {
        let bounds = state.dashboard.dataset().payload_bounds();
        state.payload_low = bounds.low();
        state.payload_high = bounds.high();
        state.apply_payload_handles();
    }

    ui.add_space(12.0);
    ui.separator();

    // ---- Booster legend ----
    ui.strong("Booster Version Category");
    for category in state.dashboard.dataset().booster_categories() {
        let color = state.booster_colors.color_for(category);
        ui.label(RichText::new(format!("● {category}")).color(color));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export filtered launches…").clicked() {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in range",
            state.dashboard.dataset().len(),
            state.visible_count()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom panel – rows behind the scatter chart
// ---------------------------------------------------------------------------

pub fn records_table(ui: &mut Ui, state: &AppState) {
    let Some(chart) = state.dashboard.scatter_chart() else {
        return;
    };
    let points = &chart.points;

    egui::CollapsingHeader::new(RichText::new(format!("Filtered launches ({})", points.len())).strong())
        .id_salt("records_table")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .column(Column::auto().at_least(140.0))
                .column(Column::auto().at_least(120.0))
                .column(Column::auto().at_least(60.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    for title in ["Launch Site", "Payload Mass (kg)", "class", "Booster"] {
                        header.col(|ui: &mut Ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, points.len(), |mut row| {
                        let point = &points[row.index()];
                        row.col(|ui: &mut Ui| {
                            ui.label(&point.launch_site);
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(format!("{:.0}", point.payload_mass_kg));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(point.outcome.class().to_string());
                        });
                        row.col(|ui: &mut Ui| {
                            let color = state
                                .booster_colors
                                .color_for(&point.booster_version_category);
                            ui.label(RichText::new(&point.booster_version_category).color(color));
                        });
                    });
                });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export filtered launches")
        .add_filter("CSV", &["csv"])
        .set_file_name("filtered_launches.csv")
        .save_file();

    if let Some(path) = file {
        state.export_visible(&path);
    }
}
