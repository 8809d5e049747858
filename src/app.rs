use eframe::egui;

use crate::data::model::Modality;
use crate::state::AppState;
use crate::ui::{self, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PolyplotApp {
    pub state: AppState,
}

impl eframe::App for PolyplotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: modality selector + inputs ----
        egui::SidePanel::left("controls_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the active rendering strategy ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.modality {
            Modality::Points => ui::points::show(ui, &self.state),
            Modality::Arrays => ui::arrays::show(ui, &self.state),
            Modality::Audio => ui::audio::show(ui, &mut self.state),
            Modality::Text => ui::text::show(ui, &mut self.state),
            Modality::Images => ui::images::show(ui, &mut self.state),
        });
    }
}
