use std::sync::Arc;

use eframe::egui::{
    pos2, vec2, Color32, FontData, FontDefinitions, FontFamily, FontId, Rect, Sense, Ui,
};

use crate::color;
use crate::layout::cloud;
use crate::state::AppState;

const MIN_FONT: f32 = 14.0;
const MAX_FONT: f32 = 64.0;
const CLOUD_FONT: &str = "wordcloud";

// ---------------------------------------------------------------------------
// Word cloud (text modality)
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &mut AppState) {
    if state.text.frequencies.is_empty() {
        super::empty_hint(ui, "Enter text in the side panel and press Generate cloud");
        return;
    }

    install_font_if_needed(ui, state);
    let family = cloud_family(state);

    // 2:1 canvas centered in the panel.
    let avail = ui.available_size();
    let width = avail.x.min(avail.y * 2.0).max(100.0);
    let (outer, _) = ui.allocate_exact_size(avail, Sense::hover());
    let canvas = Rect::from_center_size(outer.center(), vec2(width, width / 2.0));

    // Re-layout only when the canvas size (or the inputs, which clear the
    // cache) changed.
    if state.text.laid_out_for != canvas.size() {
        let sized = cloud::scale_sizes(&state.text.frequencies, MIN_FONT, MAX_FONT);
        let local = Rect::from_min_size(pos2(0.0, 0.0), canvas.size());
        let placements = cloud::layout_cloud(&sized, local, |text, size| {
            let galley = ui.fonts(|f| {
                f.layout_no_wrap(text.to_owned(), FontId::new(size, family.clone()), Color32::BLACK)
            });
            (galley.size().x, galley.size().y)
        });
        log::info!("placed {} of {} words", placements.len(), sized.len());
        state.text.placements = placements;
        state.text.laid_out_for = canvas.size();
    }

    let painter = ui.painter_at(outer);
    painter.rect_filled(canvas, 4.0, Color32::WHITE);

    for (i, word) in state.text.placements.iter().enumerate() {
        let word_color = color::series_color(i);
        let galley = ui.fonts(|f| {
            f.layout_no_wrap(
                word.text.clone(),
                FontId::new(word.size, family.clone()),
                word_color,
            )
        });
        painter.galley(canvas.min + word.rect.min.to_vec2(), galley, word_color);
    }
}

fn cloud_family(state: &AppState) -> FontFamily {
    if state.text.font_installed {
        FontFamily::Name(CLOUD_FONT.into())
    } else {
        FontFamily::Proportional
    }
}

/// Install the user-picked font under a dedicated family. Runs once per
/// picked file; a bad file resets the selection with a message.
fn install_font_if_needed(ui: &Ui, state: &mut AppState) {
    if state.text.font_installed {
        return;
    }
    let Some(path) = state.text.font_path.clone() else {
        return;
    };

    match std::fs::read(&path) {
        Ok(bytes) if is_font_data(&bytes) => {
            let mut fonts = FontDefinitions::default();
            fonts
                .font_data
                .insert(CLOUD_FONT.to_owned(), Arc::new(FontData::from_owned(bytes)));
            fonts
                .families
                .insert(FontFamily::Name(CLOUD_FONT.into()), vec![CLOUD_FONT.to_owned()]);
            ui.ctx().set_fonts(fonts);

            state.text.font_installed = true;
            state.invalidate_cloud_layout();
            log::info!("installed cloud font {}", path.display());
        }
        Ok(_) => {
            state.report_error(format!(
                "{} is not a TrueType/OpenType font",
                path.display()
            ));
            state.text.font_path = None;
        }
        Err(e) => {
            state.report_error(format!("Could not read font: {e}"));
            state.text.font_path = None;
        }
    }
}

// The font atlas aborts on arbitrary bytes, so check the sfnt magic first.
fn is_font_data(bytes: &[u8]) -> bool {
    const MAGICS: [[u8; 4]; 4] = [[0, 1, 0, 0], *b"OTTO", *b"true", *b"ttcf"];
    bytes.len() >= 4 && MAGICS.iter().any(|m| bytes[..4] == m[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_font_magics() {
        assert!(is_font_data(&[0, 1, 0, 0, 9, 9]));
        assert!(is_font_data(b"OTTOxxxx"));
        assert!(is_font_data(b"ttcfxxxx"));
        assert!(!is_font_data(b"GIF89a"));
        assert!(!is_font_data(b"ab"));
    }
}
