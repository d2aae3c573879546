use eframe::egui::Ui;
use egui_plot::{MarkerShape, Plot, Points};

use crate::color::marker_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Substation map (central panel)
// ---------------------------------------------------------------------------

/// Render the visible substations as a lon/lat scatter. Hovering a marker
/// shows its name, description and voltage display string.
pub fn substation_map(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No substation records loaded  (File → Open…)");
        });
        return;
    }

    Plot::new("substation_map")
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        // Roughly square kilometres at mid-European latitudes.
        .data_aspect(1.6)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for &idx in &state.view.indices {
                let record = &state.dataset.records[idx];
                let marker = record.marker();

                // Tooltip text: name in the first line, then the two raw
                // strings the data layer supplies.
                let hover = format!("{}\n{}\n{}", marker.name, marker.desc, marker.vls);

                let points = Points::new(vec![[marker.lon, marker.lat]])
                    .name(hover)
                    .color(marker_color(record))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(4.0);

                plot_ui.points(points);
            }
        });
}
