use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color;
use crate::data::model::ArrayData;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Line / trajectory plot (array modality)
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &AppState) {
    let Some(data) = &state.arrays.data else {
        super::empty_hint(ui, "Enter array rows in the side panel and press Plot");
        return;
    };

    match data {
        ArrayData::Planar { x, y } => planar_plot(ui, x, y),
        ArrayData::Spatial { x, y, z } => spatial_plot(ui, state, x, y, z),
    }
}

fn planar_plot(ui: &mut Ui, x: &[f64], y: &[f64]) {
    let points: PlotPoints = x.iter().zip(y).map(|(&a, &b)| [a, b]).collect();

    Plot::new("array_plot_2d")
        .legend(Legend::default())
        .x_axis_label("X")
        .y_axis_label("Y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name("2D line")
                    .color(color::series_color(0))
                    .width(1.5),
            );
        });
}

fn spatial_plot(ui: &mut Ui, state: &AppState, x: &[f64], y: &[f64], z: &[f64]) {
    let proj = state.arrays.projection;

    let points: PlotPoints = x
        .iter()
        .zip(y)
        .zip(z)
        .map(|((&a, &b), &c)| proj.project([a, b, c]))
        .collect();

    // Axis guides: segments from the data minimum corner along each axis.
    let min = |v: &[f64]| v.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = |v: &[f64]| v.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let origin = [min(x), min(y), min(z)];
    let axes = [
        ("X", [max(x), origin[1], origin[2]]),
        ("Y", [origin[0], max(y), origin[2]]),
        ("Z", [origin[0], origin[1], max(z)]),
    ];

    Plot::new("array_plot_3d")
        .legend(Legend::default())
        .data_aspect(1.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (i, (name, end)) in axes.iter().enumerate() {
                let guide: PlotPoints =
                    vec![proj.project(origin), proj.project(*end)].into();
                plot_ui.line(
                    Line::new(guide)
                        .name(*name)
                        .color(color::series_color(i + 1))
                        .width(1.0),
                );
            }
            plot_ui.line(
                Line::new(points)
                    .name("trajectory")
                    .color(color::series_color(0))
                    .width(1.5),
            );
        });
}
