use eframe::egui::{
    pos2, vec2, Align2, Color32, ColorImage, FontId, Rect, Sense, TextureOptions, Ui, Vec2,
};

use crate::layout::grid::GridLayout;
use crate::layout::heart;
use crate::state::{AppState, ImageArrangement};

const CELL_MARGIN: f32 = 6.0;
const CAPTION_HEIGHT: f32 = 16.0;

// ---------------------------------------------------------------------------
// Image layouts (grid / heart)
// ---------------------------------------------------------------------------

pub fn show(ui: &mut Ui, state: &mut AppState) {
    if state.images.loaded.is_empty() {
        super::empty_hint(ui, "Add images in the side panel  (File → Add images…)");
        return;
    }

    ensure_textures(ui, state);

    match state.images.arrangement {
        ImageArrangement::Grid => grid_view(ui, state),
        ImageArrangement::Heart => heart_view(ui, state),
    }
}

/// Upload one texture per readable image; unreadable slots stay `None`.
fn ensure_textures(ui: &Ui, state: &mut AppState) {
    if state.images.textures.len() == state.images.loaded.len() {
        return;
    }
    state.images.textures = state
        .images
        .loaded
        .iter()
        .enumerate()
        .map(|(i, img)| {
            img.pixels.as_ref().map(|rgba| {
                let size = [rgba.width() as usize, rgba.height() as usize];
                let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
                ui.ctx()
                    .load_texture(format!("image_{i}"), color_image, TextureOptions::LINEAR)
            })
        })
        .collect();
}

fn grid_view(ui: &mut Ui, state: &AppState) {
    let layout = GridLayout::new(state.images.loaded.len(), state.images.columns);
    let avail = ui.available_size();
    let cell = (avail.x / layout.columns as f32).min(avail.y / layout.rows.max(1) as f32);
    let block = vec2(cell * layout.columns as f32, cell * layout.rows as f32);

    let (outer, _) = ui.allocate_exact_size(avail, Sense::hover());
    let origin = outer.center() - block / 2.0;
    let painter = ui.painter_at(outer);
    let caption_color = ui.visuals().strong_text_color();

    for (idx, texture) in state.images.textures.iter().enumerate() {
        let (row, col) = layout.cell(idx);
        let cell_rect = Rect::from_min_size(
            origin + vec2(col as f32 * cell, row as f32 * cell),
            vec2(cell, cell),
        )
        .shrink(CELL_MARGIN);

        // Unreadable slot: the cell stays blank, like the rest of the
        // trailing blank cells.
        let Some(texture) = texture else { continue };

        painter.text(
            pos2(cell_rect.center().x, cell_rect.min.y),
            Align2::CENTER_TOP,
            format!("Image {}", idx + 1),
            FontId::proportional(12.0),
            caption_color,
        );

        let image_area =
            Rect::from_min_max(cell_rect.min + vec2(0.0, CAPTION_HEIGHT), cell_rect.max);
        painter.image(
            texture.id(),
            fit_rect(texture.size_vec2(), image_area),
            uv_full(),
            Color32::WHITE,
        );
    }
}

fn heart_view(ui: &mut Ui, state: &AppState) {
    let positions = heart::heart_positions(state.images.loaded.len());
    let avail = ui.available_size();
    let side = avail.x.min(avail.y);

    let (outer, _) = ui.allocate_exact_size(avail, Sense::hover());
    let painter = ui.painter_at(outer);
    let center = outer.center();
    let half = side / 2.0;
    let thumb = (side * 0.1).max(24.0);

    for (pos, texture) in positions.iter().zip(&state.images.textures) {
        // Unreadable images are skipped; the remaining ones still render.
        let Some(texture) = texture else { continue };

        let px = center.x + (pos[0] / heart::VIEW_EXTENT) as f32 * half;
        let py = center.y - (pos[1] / heart::VIEW_EXTENT) as f32 * half;
        let bounds = Rect::from_center_size(pos2(px, py), vec2(thumb, thumb));
        painter.image(
            texture.id(),
            fit_rect(texture.size_vec2(), bounds),
            uv_full(),
            Color32::WHITE,
        );
    }
}

/// Largest aspect-preserving rect for `tex_size` centered inside `bounds`.
fn fit_rect(tex_size: Vec2, bounds: Rect) -> Rect {
    if tex_size.x <= 0.0 || tex_size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / tex_size.x).min(bounds.height() / tex_size.y);
    Rect::from_center_size(bounds.center(), tex_size * scale)
}

fn uv_full() -> Rect {
    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0))
}
