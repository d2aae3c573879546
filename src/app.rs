use eframe::egui;

use crate::data::model::SubstationDataset;
use crate::state::AppState;
use crate::ui::{map, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GridAtlasApp {
    pub state: AppState,
}

impl GridAtlasApp {
    pub fn new(dataset: SubstationDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for GridAtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: tier checklist + stats ----
        egui::TopBottomPanel::bottom("tier_panel").show(ctx, |ui| {
            panels::tier_checklist(ui, &mut self.state);
        });

        // ---- Central panel: map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            map::substation_map(ui, &self.state);
        });
    }
}
