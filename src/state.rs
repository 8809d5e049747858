use std::path::PathBuf;

use eframe::egui::{TextureHandle, Vec2};

use crate::data::images::LoadedImage;
use crate::data::model::{ArrayData, AudioClip, Modality, PointSet};
use crate::data::tokenize;
use crate::dsp::spectrogram::MelSpectrogram;
use crate::layout::cloud::PlacedWord;
use crate::layout::projection::Projection;

// ---------------------------------------------------------------------------
// View selectors
// ---------------------------------------------------------------------------

/// Which rendering of the decoded audio is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioView {
    #[default]
    Waveform,
    Spectrogram,
}

/// How the image set is arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageArrangement {
    #[default]
    Grid,
    Heart,
}

// ---------------------------------------------------------------------------
// Per-modality state
// ---------------------------------------------------------------------------

pub struct PointsState {
    pub input: String,
    pub dataset: Option<PointSet>,
    pub marker_radius: f32,
}

impl Default for PointsState {
    fn default() -> Self {
        PointsState {
            input: String::new(),
            dataset: None,
            marker_radius: 3.0,
        }
    }
}

#[derive(Default)]
pub struct ArraysState {
    pub input: String,
    pub data: Option<ArrayData>,
    pub projection: Projection,
}

#[derive(Default)]
pub struct AudioState {
    pub path: Option<PathBuf>,
    pub clip: Option<AudioClip>,
    pub view: AudioView,
    /// Computed lazily the first time the spectrogram view is shown.
    pub spectrogram: Option<MelSpectrogram>,
    pub texture: Option<TextureHandle>,
}

pub struct TextState {
    pub input: String,
    pub font_path: Option<PathBuf>,
    pub font_installed: bool,
    pub frequencies: Vec<(String, usize)>,
    pub placements: Vec<PlacedWord>,
    /// Canvas size the cached placements were computed for.
    pub laid_out_for: Vec2,
}

impl Default for TextState {
    fn default() -> Self {
        TextState {
            // The sample sentence the original platform shipped with.
            input: "我爱人工智能，人工智能改变世界。".to_string(),
            font_path: None,
            font_installed: false,
            frequencies: Vec::new(),
            placements: Vec::new(),
            laid_out_for: Vec2::ZERO,
        }
    }
}

pub struct ImagesState {
    pub loaded: Vec<LoadedImage>,
    pub textures: Vec<Option<TextureHandle>>,
    pub arrangement: ImageArrangement,
    pub columns: usize,
}

impl Default for ImagesState {
    fn default() -> Self {
        ImagesState {
            loaded: Vec::new(),
            textures: Vec::new(),
            arrangement: ImageArrangement::default(),
            columns: 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state. Plot data is kept parsed and ready; textures are
/// cached here so they upload once, not per frame.
#[derive(Default)]
pub struct AppState {
    pub modality: Modality,
    pub points: PointsState,
    pub arrays: ArraysState,
    pub audio: AudioState,
    pub text: TextState,
    pub images: ImagesState,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a decoded clip; derived views are dropped and recomputed on
    /// demand.
    pub fn set_audio_clip(&mut self, path: PathBuf, clip: AudioClip) {
        self.audio.path = Some(path);
        self.audio.clip = Some(clip);
        self.audio.spectrogram = None;
        self.audio.texture = None;
        self.status_message = None;
    }

    /// Ingest a freshly loaded image set; textures re-upload on next frame.
    pub fn set_images(&mut self, loaded: Vec<LoadedImage>) {
        let unreadable = loaded.iter().filter(|i| i.pixels.is_none()).count();
        self.status_message = if unreadable > 0 {
            Some(format!("Skipped {unreadable} unreadable image(s)"))
        } else {
            None
        };
        self.images.loaded = loaded;
        self.images.textures.clear();
    }

    /// Re-tokenize the text input and invalidate the cached cloud layout.
    pub fn regenerate_cloud(&mut self) {
        self.text.frequencies = tokenize::word_frequencies(&self.text.input);
        self.invalidate_cloud_layout();
        if self.text.frequencies.is_empty() {
            self.status_message = Some("No words found in the text input".to_string());
        } else {
            self.status_message = None;
        }
    }

    pub fn invalidate_cloud_layout(&mut self) {
        self.text.placements.clear();
        self.text.laid_out_for = Vec2::ZERO;
    }

    pub fn report_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("{message}");
        self.status_message = Some(message);
    }
}
