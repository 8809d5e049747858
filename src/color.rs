use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Categorical series colours
// ---------------------------------------------------------------------------

/// Stepping hues by the golden angle keeps consecutive series visually
/// distinct without knowing the series count up front.
const GOLDEN_ANGLE: f32 = 137.50776;

/// Stable colour for series `i`.
pub fn series_color(i: usize) -> Color32 {
    let hue = (i as f32 * GOLDEN_ANGLE) % 360.0;
    let rgb: Srgb = Hsl::new(hue, 0.65, 0.5).into_color();
    to_color32(rgb)
}

// ---------------------------------------------------------------------------
// Sequential colormap (spectrogram intensities)
// ---------------------------------------------------------------------------

/// Viridis anchor points, mixed in linear RGB between neighbours.
const VIRIDIS: [[u8; 3]; 5] = [
    [68, 1, 84],
    [59, 82, 139],
    [33, 145, 140],
    [94, 201, 98],
    [253, 231, 37],
];

/// Map a normalised intensity in [0, 1] to a viridis colour.
pub fn sequential_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (VIRIDIS.len() - 1) as f32;
    let i = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - i as f32;

    let mixed = anchor(i).mix(anchor(i + 1), frac);
    to_color32(Srgb::from_linear(mixed))
}

fn anchor(i: usize) -> LinSrgb {
    Srgb::new(
        VIRIDIS[i][0] as f32 / 255.0,
        VIRIDIS[i][1] as f32 / 255.0,
        VIRIDIS[i][2] as f32 / 255.0,
    )
    .into_linear()
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colors_are_distinct() {
        let colors: Vec<Color32> = (0..12).map(series_color).collect();
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j], "series {i} and {j} collide");
            }
        }
    }

    #[test]
    fn series_colors_are_stable() {
        assert_eq!(series_color(3), series_color(3));
        assert_eq!(series_color(0), series_color(0));
    }

    #[test]
    fn sequential_endpoints_hit_the_anchors() {
        assert_eq!(sequential_color(0.0), Color32::from_rgb(68, 1, 84));
        assert_eq!(sequential_color(1.0), Color32::from_rgb(253, 231, 37));
        // Out-of-range input clamps instead of panicking.
        assert_eq!(sequential_color(-3.0), sequential_color(0.0));
        assert_eq!(sequential_color(7.0), sequential_color(1.0));
    }
}
