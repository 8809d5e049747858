use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (point modality)
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.points.dataset else {
        super::empty_hint(ui, "Enter coordinates in the side panel and press Plot");
        return;
    };
    if dataset.is_empty() {
        super::empty_hint(ui, "The loaded file contained no points");
        return;
    }

    let points: PlotPoints = dataset.points.iter().map(|p| [p.x, p.y]).collect();

    Plot::new("point_plot")
        .legend(Legend::default())
        .x_axis_label("X")
        .y_axis_label("Y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .name("points")
                    .color(color::series_color(0))
                    .radius(state.points.marker_radius),
            );
        });
}
