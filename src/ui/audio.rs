use eframe::egui::{vec2, ColorImage, TextureOptions, Ui};
use egui_plot::{Legend, Line, Plot, PlotImage, PlotPoint, PlotPoints};

use crate::color;
use crate::data::audio;
use crate::dsp::spectrogram::{self, MelSpectrogram, TOP_DB};
use crate::state::{AppState, AudioView};

/// Envelope resolution for the waveform view.
const MAX_ENVELOPE_BUCKETS: usize = 4096;
/// Widest spectrogram texture we upload; longer clips are mean-pooled.
const MAX_TEXTURE_COLUMNS: usize = 4096;

// ---------------------------------------------------------------------------
// Audio views
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &mut AppState) {
    if state.audio.clip.is_none() {
        super::empty_hint(ui, "Open an audio file  (File → Open audio…)");
        return;
    }
    match state.audio.view {
        AudioView::Waveform => waveform_view(ui, state),
        AudioView::Spectrogram => spectrogram_view(ui, state),
    }
}

fn waveform_view(ui: &mut Ui, state: &AppState) {
    let Some(clip) = &state.audio.clip else { return };
    let envelope = audio::envelope(clip, MAX_ENVELOPE_BUCKETS);

    Plot::new("waveform_plot")
        .legend(Legend::default())
        .x_axis_label("Time (s)")
        .y_axis_label("Amplitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(envelope))
                    .name("waveform")
                    .color(color::series_color(0))
                    .width(1.0),
            );
        });
}

fn spectrogram_view(ui: &mut Ui, state: &mut AppState) {
    // Both caches are derived from the clip and computed on first demand.
    if state.audio.spectrogram.is_none() {
        if let Some(clip) = &state.audio.clip {
            let spec = spectrogram::mel_spectrogram(&clip.samples, clip.sample_rate);
            log::info!("mel spectrogram ready: {} bands × {} frames", spec.n_mels, spec.frames);
            state.audio.spectrogram = Some(spec);
        }
    }
    if state.audio.texture.is_none() {
        if let Some(spec) = &state.audio.spectrogram {
            let image = spectrogram_image(spec);
            state.audio.texture =
                Some(ui.ctx()
                    .load_texture("mel_spectrogram", image, TextureOptions::LINEAR));
        }
    }
    let (Some(spec), Some(texture)) = (&state.audio.spectrogram, &state.audio.texture) else {
        return;
    };

    let duration = spec.duration_secs();
    let n_mels = spec.n_mels;
    let sample_rate = spec.sample_rate;

    Plot::new("mel_spectrogram_plot")
        .x_axis_label("Time (s)")
        .y_axis_label("Mel band")
        .label_formatter(move |_name, value| {
            let band = value.y.clamp(0.0, (n_mels - 1) as f64) as usize;
            format!(
                "t = {:.2} s\nband {band} (~{:.0} Hz)",
                value.x,
                spectrogram::band_center_hz(sample_rate, n_mels, band)
            )
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.image(
                PlotImage::new(
                    texture,
                    PlotPoint::new(duration / 2.0, n_mels as f64 / 2.0),
                    vec2(duration as f32, n_mels as f32),
                )
                .name("mel power (dB)"),
            );
        });
}

/// Build the spectrogram texture: one row per mel band (low bands at the
/// bottom), columns mean-pooled down to the texture budget.
fn spectrogram_image(spec: &MelSpectrogram) -> ColorImage {
    let width = spec.frames.min(MAX_TEXTURE_COLUMNS).max(1);
    let height = spec.n_mels;
    let mut image = ColorImage::new([width, height], eframe::egui::Color32::BLACK);

    for row in 0..height {
        // Screen row 0 is the top, so it shows the highest band.
        let mel = height - 1 - row;
        for col in 0..width {
            let lo = col * spec.frames / width;
            let hi = (((col + 1) * spec.frames) / width).max(lo + 1);
            let mean: f32 =
                (lo..hi).map(|f| spec.at(mel, f)).sum::<f32>() / (hi - lo) as f32;
            let t = (mean + TOP_DB) / TOP_DB;
            image.pixels[row * width + col] = color::sequential_color(t);
        }
    }
    image
}
