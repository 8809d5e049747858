use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{ArrayData, Modality};
use crate::data::{audio, images, loader, parse};
use crate::layout::grid::GridLayout;
use crate::state::{AppState, AudioView, ImageArrangement};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open points…").clicked() {
                open_points_dialog(state);
                ui.close_menu();
            }
            if ui.button("Open audio…").clicked() {
                open_audio_dialog(state);
                ui.close_menu();
            }
            if ui.button("Add images…").clicked() {
                add_images_dialog(state);
                ui.close_menu();
            }
            if ui.button("Choose cloud font…").clicked() {
                choose_font_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(summary) = data_summary(state) {
            ui.label(summary);
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

/// One-line description of the active modality's loaded data.
fn data_summary(state: &AppState) -> Option<String> {
    match state.modality {
        Modality::Points => state
            .points
            .dataset
            .as_ref()
            .map(|set| format!("{} points", set.len())),
        Modality::Arrays => state
            .arrays
            .data
            .as_ref()
            .map(|d| format!("{}D series, {} samples", d.dimensions(), d.len())),
        Modality::Audio => state
            .audio
            .clip
            .as_ref()
            .map(|c| format!("{:.1} s @ {} Hz", c.duration_secs(), c.sample_rate)),
        Modality::Text => (!state.text.frequencies.is_empty())
            .then(|| format!("{} distinct words", state.text.frequencies.len())),
        Modality::Images => {
            let n = state.images.loaded.len();
            if n == 0 {
                return None;
            }
            Some(match state.images.arrangement {
                ImageArrangement::Grid => {
                    let g = GridLayout::new(n, state.images.columns);
                    format!("{n} images in a {}×{} grid, {} blank", g.rows, g.columns, g.blank_cells())
                }
                ImageArrangement::Heart => format!("{n} images on the heart curve"),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Left side panel – modality selector and per-modality controls
// ---------------------------------------------------------------------------

pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Modality");
    egui::ComboBox::from_id_salt("modality")
        .selected_text(state.modality.label())
        .show_ui(ui, |ui: &mut Ui| {
            for m in Modality::ALL {
                if ui
                    .selectable_label(state.modality == m, m.label())
                    .clicked()
                {
                    state.modality = m;
                    state.status_message = None;
                }
            }
        });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match state.modality {
            Modality::Points => points_controls(ui, state),
            Modality::Arrays => arrays_controls(ui, state),
            Modality::Audio => audio_controls(ui, state),
            Modality::Text => text_controls(ui, state),
            Modality::Images => images_controls(ui, state),
        });
}

fn points_controls(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Point coordinates");
    ui.label("e.g. (1,2);(2,3);(3,5)");
    ui.text_edit_singleline(&mut state.points.input);

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Plot").clicked() {
            match parse::parse_points(&state.points.input) {
                Ok(set) => {
                    log::info!("parsed {} points", set.len());
                    state.points.dataset = Some(set);
                    state.status_message = None;
                }
                Err(e) => state.report_error(format!("Input format error: {e}")),
            }
        }
        if ui.button("Load from file…").clicked() {
            open_points_dialog(state);
        }
    });

    ui.add_space(4.0);
    ui.add(egui::Slider::new(&mut state.points.marker_radius, 1.0..=10.0).text("Marker size"));
}

fn arrays_controls(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Array rows");
    ui.label("One row per line, comma separated.\n2 rows → 2D line, 3 rows → 3D trajectory.");
    ui.add(
        egui::TextEdit::multiline(&mut state.arrays.input)
            .hint_text("1,2,3\n4,5,6")
            .desired_rows(4),
    );

    if ui.button("Plot").clicked() {
        match parse::parse_rows(&state.arrays.input).and_then(ArrayData::from_rows) {
            Ok(data) => {
                log::info!("parsed {}D array, {} samples", data.dimensions(), data.len());
                state.arrays.data = Some(data);
                state.status_message = None;
            }
            Err(e) => state.report_error(format!("Input format error: {e}")),
        }
    }

    if matches!(state.arrays.data, Some(ArrayData::Spatial { .. })) {
        ui.add_space(4.0);
        ui.strong("View angles");
        ui.add(
            egui::Slider::new(&mut state.arrays.projection.yaw, 0.0..=std::f64::consts::TAU)
                .text("Yaw"),
        );
        ui.add(
            egui::Slider::new(
                &mut state.arrays.projection.pitch,
                0.0..=std::f64::consts::FRAC_PI_2,
            )
            .text("Pitch"),
        );
    }
}

fn audio_controls(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Audio file");
    if ui.button("Open audio…").clicked() {
        open_audio_dialog(state);
    }
    if let Some(path) = &state.audio.path {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        ui.label(RichText::new(name).italics());
    }

    ui.add_space(4.0);
    ui.strong("View");
    ui.radio_value(&mut state.audio.view, AudioView::Waveform, "Waveform");
    ui.radio_value(&mut state.audio.view, AudioView::Spectrogram, "Mel spectrogram");
}

fn text_controls(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Text");
    ui.add(egui::TextEdit::multiline(&mut state.text.input).desired_rows(6));

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Generate cloud").clicked() {
            state.regenerate_cloud();
            log::info!("tokenized {} distinct words", state.text.frequencies.len());
        }
        if ui.button("Choose font…").clicked() {
            choose_font_dialog(state);
        }
    });

    match &state.text.font_path {
        Some(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ui.label(RichText::new(format!("Font: {name}")).italics());
        }
        None => {
            ui.label(
                RichText::new("Built-in fonts cover Latin text; pick a font for other scripts.")
                    .small(),
            );
        }
    }
}

fn images_controls(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Images");
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Add images…").clicked() {
            add_images_dialog(state);
        }
        if !state.images.loaded.is_empty() && ui.button("Clear").clicked() {
            state.images.loaded.clear();
            state.images.textures.clear();
        }
    });

    ui.add_space(4.0);
    ui.strong("Arrangement");
    ui.radio_value(&mut state.images.arrangement, ImageArrangement::Grid, "Grid");
    ui.radio_value(&mut state.images.arrangement, ImageArrangement::Heart, "Heart");
    if state.images.arrangement == ImageArrangement::Grid {
        ui.add(egui::Slider::new(&mut state.images.columns, 1..=5).text("Columns"));
    }

    if !state.images.loaded.is_empty() {
        ui.separator();
        for img in &state.images.loaded {
            ui.horizontal(|ui: &mut Ui| {
                if img.pixels.is_some() {
                    ui.add(
                        egui::Image::new(format!("file://{}", img.path.display()))
                            .max_width(48.0)
                            .max_height(32.0),
                    );
                } else {
                    ui.label(RichText::new("⚠ unreadable").color(Color32::YELLOW));
                }
                ui.label(RichText::new(img.file_name()).small());
            });
        }
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_points_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open point data")
        .add_filter("Point data", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_points(&path) {
            Ok(set) => {
                log::info!("loaded {} points from {}", set.len(), path.display());
                state.modality = Modality::Points;
                state.points.dataset = Some(set);
                state.status_message = None;
            }
            Err(e) => {
                log::error!("failed to load points: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn open_audio_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open audio")
        .add_filter("Audio", &["mp3", "wav"])
        .pick_file();

    if let Some(path) = file {
        match audio::decode(&path) {
            Ok(clip) => {
                log::info!(
                    "decoded {}: {:.1} s at {} Hz",
                    path.display(),
                    clip.duration_secs(),
                    clip.sample_rate
                );
                state.modality = Modality::Audio;
                state.set_audio_clip(path, clip);
            }
            Err(e) => {
                // Non-fatal: report, keep whatever was loaded before.
                log::error!("failed to decode audio: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn add_images_dialog(state: &mut AppState) {
    let files = rfd::FileDialog::new()
        .set_title("Add images")
        .add_filter("Images", &["png", "jpg", "jpeg"])
        .pick_files();

    if let Some(mut paths) = files {
        let mut all: Vec<_> = state.images.loaded.iter().map(|i| i.path.clone()).collect();
        all.append(&mut paths);

        let loaded = images::load_image_set(&all);
        let readable = loaded.iter().filter(|i| i.pixels.is_some()).count();
        log::info!("loaded {readable} of {} images", loaded.len());
        state.modality = Modality::Images;
        state.set_images(loaded);
    }
}

pub fn choose_font_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Choose word-cloud font")
        .add_filter("Fonts", &["ttf", "otf", "ttc"])
        .pick_file();

    if let Some(path) = file {
        state.modality = Modality::Text;
        state.text.font_path = Some(path);
        state.text.font_installed = false;
        state.invalidate_cloud_layout();
    }
}
