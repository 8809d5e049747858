use std::path::{Path, PathBuf};

use image::RgbaImage;

// ---------------------------------------------------------------------------
// Image set loading
// ---------------------------------------------------------------------------

/// One entry of an image set. `pixels` is `None` when the file could not be
/// decoded; the slot is kept so layouts stay aligned with the selection.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub pixels: Option<RgbaImage>,
}

impl LoadedImage {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Load every image of the set. An unreadable file is logged and becomes an
/// empty slot; the rest of the set still loads.
pub fn load_image_set(paths: &[PathBuf]) -> Vec<LoadedImage> {
    paths.iter().map(|p| load_one(p)).collect()
}

fn load_one(path: &Path) -> LoadedImage {
    let pixels = match image::open(path) {
        Ok(img) => Some(img.to_rgba8()),
        Err(e) => {
            log::warn!("skipping unreadable image {}: {e}", path.display());
            None
        }
    };
    LoadedImage {
        path: path.to_path_buf(),
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_image_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("good.png");
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]));
        img.save(&good).unwrap();

        let bad = dir.path().join("bad.png");
        std::fs::write(&bad, b"not an image").unwrap();

        let missing = dir.path().join("missing.jpg");

        let set = load_image_set(&[good, bad, missing]);
        assert_eq!(set.len(), 3);
        assert!(set[0].pixels.is_some());
        assert!(set[1].pixels.is_none());
        assert!(set[2].pixels.is_none());
        assert_eq!(set[0].pixels.as_ref().unwrap().dimensions(), (4, 4));
    }
}
