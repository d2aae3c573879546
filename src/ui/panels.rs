use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::data::model::VoltageTier;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bottom panel – tier checklist and stats readout
// ---------------------------------------------------------------------------

/// Render the voltage-tier checkboxes and the matched/total stats line.
pub fn tier_checklist(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            for tier in VoltageTier::SELECTABLE {
                let mut checked = state.selection.contains(&tier);
                if ui.checkbox(&mut checked, tier.label()).changed() {
                    state.toggle_tier(tier);
                }
                ui.add_space(10.0);
            }
        });

        ui.label(RichText::new(state.view.stats_label()).strong());
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} substations loaded, {} visible",
            state.dataset.len(),
            state.view.matched
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user open a different dataset. A failed load keeps the previous
/// dataset and surfaces the error in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open substation data")
        .add_filter("XML", &["xml"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "loaded {} substation records from {}",
                    dataset.len(),
                    path.display()
                );
                state.replace_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
