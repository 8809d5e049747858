use eframe::egui::{vec2, Rect};

// ---------------------------------------------------------------------------
// Word sizing
// ---------------------------------------------------------------------------

/// A word with its final font size, before placement.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedWord {
    pub text: String,
    pub size: f32,
}

/// Map frequencies to font sizes between `min_size` and `max_size`. Sizes
/// grow with the square root of the relative count so mid-frequency words
/// stay legible. Expects `freqs` sorted descending (the tokenizer's order).
pub fn scale_sizes(freqs: &[(String, usize)], min_size: f32, max_size: f32) -> Vec<SizedWord> {
    let max_count = freqs.first().map(|(_, c)| *c).unwrap_or(0).max(1) as f32;
    freqs
        .iter()
        .map(|(text, count)| SizedWord {
            text: text.clone(),
            size: min_size + (max_size - min_size) * (*count as f32 / max_count).sqrt(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Spiral placement
// ---------------------------------------------------------------------------

/// A word placed on the canvas.
#[derive(Debug, Clone)]
pub struct PlacedWord {
    pub text: String,
    pub size: f32,
    pub rect: Rect,
}

const PADDING: f32 = 2.0;
const ANGLE_STEP: f32 = 0.3;
const RADIUS_PER_RADIAN: f32 = 0.9;

/// Place words on an archimedean spiral from the canvas center outward,
/// keeping rectangles collision-free. Deterministic: the same input always
/// yields the same layout. Words that fit nowhere are dropped.
///
/// Text measurement is injected so the geometry stays independent of any
/// font backend.
pub fn layout_cloud(
    words: &[SizedWord],
    canvas: Rect,
    mut measure: impl FnMut(&str, f32) -> (f32, f32),
) -> Vec<PlacedWord> {
    let center = canvas.center();
    let reach = canvas.width().hypot(canvas.height()) / 2.0;
    let mut placed: Vec<PlacedWord> = Vec::new();

    for word in words {
        let (w, h) = measure(&word.text, word.size);
        if w > canvas.width() || h > canvas.height() {
            continue;
        }

        let mut theta = 0.0f32;
        let spot = loop {
            let r = RADIUS_PER_RADIAN * theta;
            if r > reach {
                break None;
            }
            let pos = center + vec2(r * theta.cos(), r * theta.sin());
            theta += ANGLE_STEP;

            let rect = Rect::from_center_size(pos, vec2(w, h));
            if !canvas.contains_rect(rect) {
                continue;
            }
            let padded = rect.expand(PADDING);
            if placed.iter().all(|p| !p.rect.intersects(padded)) {
                break Some(rect);
            }
        };

        match spot {
            Some(rect) => placed.push(PlacedWord {
                text: word.text.clone(),
                size: word.size,
                rect,
            }),
            None => log::debug!("no room left for '{}'", word.text),
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    /// Width proportional to character count, like a monospace face.
    fn measure(text: &str, size: f32) -> (f32, f32) {
        (text.chars().count() as f32 * size * 0.6, size * 1.2)
    }

    fn words(n: usize) -> Vec<SizedWord> {
        let freqs: Vec<(String, usize)> = (0..n).map(|i| (format!("w{i}"), n - i)).collect();
        scale_sizes(&freqs, 12.0, 48.0)
    }

    #[test]
    fn sizes_follow_frequency() {
        let sized = words(5);
        assert!((sized[0].size - 48.0).abs() < 1e-5, "top word is largest");
        assert!(sized.windows(2).all(|w| w[0].size >= w[1].size));
        assert!(sized.iter().all(|w| w.size >= 12.0 && w.size <= 48.0));
    }

    #[test]
    fn first_word_lands_in_the_center() {
        let canvas = Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 400.0));
        let placed = layout_cloud(&words(1), canvas, measure);
        assert_eq!(placed.len(), 1);
        assert!((placed[0].rect.center() - canvas.center()).length() < 1.0);
    }

    #[test]
    fn placements_do_not_overlap_and_stay_inside() {
        let canvas = Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 400.0));
        let placed = layout_cloud(&words(30), canvas, measure);
        assert!(!placed.is_empty());

        for p in &placed {
            assert!(canvas.contains_rect(p.rect), "'{}' escaped", p.text);
        }
        for i in 0..placed.len() {
            for j in (i + 1)..placed.len() {
                assert!(
                    !placed[i].rect.intersects(placed[j].rect),
                    "'{}' overlaps '{}'",
                    placed[i].text,
                    placed[j].text
                );
            }
        }
    }

    #[test]
    fn oversized_words_are_dropped() {
        let canvas = Rect::from_min_size(pos2(0.0, 0.0), vec2(60.0, 30.0));
        let huge = vec![SizedWord {
            text: "gargantuan".to_string(),
            size: 40.0,
        }];
        assert!(layout_cloud(&huge, canvas, measure).is_empty());
    }

    #[test]
    fn layout_is_deterministic() {
        let canvas = Rect::from_min_size(pos2(0.0, 0.0), vec2(640.0, 320.0));
        let a = layout_cloud(&words(20), canvas, measure);
        let b = layout_cloud(&words(20), canvas, measure);
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(&b) {
            assert_eq!(pa.rect, pb.rect);
        }
    }
}
