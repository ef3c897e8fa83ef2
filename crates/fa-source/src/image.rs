use std::path::Path;

use anyhow::{Context, Result, ensure};
use fa_core::grid::{GrayGrid, RgbGrid};

use crate::resize::Resizer;

/// Derive the character-grid height for a source aspect ratio.
///
/// `height = floor(width × (src_h / src_w) × 0.5)`. The 0.5 factor
/// compensates for terminal glyphs being roughly twice as tall as wide.
/// Never returns 0: a one-row grid is the floor for degenerate ratios.
///
/// # Example
/// ```
/// use fa_source::image::derived_height;
/// assert_eq!(derived_height(200, 100, 100), 25);
/// ```
#[must_use]
pub fn derived_height(src_w: u32, src_h: u32, width: u32) -> u32 {
    let r = f64::from(src_h) / f64::from(src_w);
    let h = (f64::from(width) * r * 0.5) as u32;
    h.max(1)
}

/// Source d'image statique : vue RGB et vue grayscale du même fichier.
///
/// Les deux vues gardent les dimensions natives; [`ImageSource::sample`]
/// les réduit ensemble avec le même filtre vers la grille cible.
pub struct ImageSource {
    rgb: RgbGrid,
    gray: GrayGrid,
}

impl ImageSource {
    /// Load an image from disk, keeping original colors and a grayscale
    /// view for brightness.
    ///
    /// # Errors
    /// Returns an error if the image cannot be loaded. There is one image
    /// per invocation, so this failure is fatal to the caller.
    pub fn open(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("Impossible de charger {}", path.display()))?;
        let rgb_img = img.to_rgb8();
        let gray_img = img.to_luma8();
        let (width, height) = rgb_img.dimensions();
        ensure!(width > 0 && height > 0, "image has zero dimensions");
        log::debug!("loaded {} at {width}×{height}", path.display());
        Ok(Self {
            rgb: RgbGrid::from_raw(width, height, rgb_img.into_raw()),
            gray: GrayGrid::from_raw(width, height, gray_img.into_raw()),
        })
    }

    /// Native dimensions before any resize.
    #[must_use]
    pub fn native_size(&self) -> (u32, u32) {
        (self.rgb.width, self.rgb.height)
    }

    /// Resample both views to `width` columns and the derived row count.
    ///
    /// One Lanczos3 pass per view, identical target size, so pixel (x, y)
    /// in both output grids refers to the same spatial location. The
    /// height is always derived here and never supplied by the caller.
    ///
    /// # Errors
    /// Returns an error for a zero `width` or a failed resize.
    pub fn sample(&self, width: u32) -> Result<(GrayGrid, RgbGrid)> {
        ensure!(width > 0, "target width must be at least 1");
        let height = derived_height(self.rgb.width, self.rgb.height, width);

        let mut resizer = Resizer::new();
        let mut gray = GrayGrid::new(width, height);
        let mut rgb = RgbGrid::new(width, height);
        resizer.resize_gray_into(&self.gray, &mut gray)?;
        resizer.resize_rgb_into(&self.rgb, &mut rgb)?;
        Ok((gray, rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_rule_halves_height() {
        // 200×100 source, width 100: r = 0.5 → height 25.
        assert_eq!(derived_height(200, 100, 100), 25);
    }

    #[test]
    fn degenerate_height_clamps_to_one_row() {
        // width × r × 0.5 < 1 must still produce a grid.
        assert_eq!(derived_height(1000, 10, 10), 1);
    }

    #[test]
    fn square_source_is_half_height() {
        assert_eq!(derived_height(100, 100, 100), 50);
    }

    #[test]
    fn sample_yields_parallel_grids() {
        let native = ImageSource {
            rgb: RgbGrid::from_raw(16, 16, vec![255u8; 16 * 16 * 3]),
            gray: GrayGrid::filled(16, 16, 255),
        };
        let (gray, rgb) = native.sample(8).unwrap();
        assert_eq!((gray.width, gray.height), (8, 4));
        assert_eq!((rgb.width, rgb.height), (8, 4));
        assert!(gray.data.iter().all(|&p| p == 255));
    }

    #[test]
    fn zero_width_rejected() {
        let native = ImageSource {
            rgb: RgbGrid::from_raw(4, 4, vec![0u8; 48]),
            gray: GrayGrid::new(4, 4),
        };
        assert!(native.sample(0).is_err());
    }
}
