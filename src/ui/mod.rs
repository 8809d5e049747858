/// UI layer: the side/top panels plus one rendering strategy per modality.
pub mod arrays;
pub mod audio;
pub mod images;
pub mod panels;
pub mod points;
pub mod text;

use eframe::egui::Ui;

/// Placeholder shown in the central panel before data is loaded.
pub(crate) fn empty_hint(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading(text);
    });
}
