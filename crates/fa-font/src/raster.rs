use ab_glyph::{Font, FontRef, PxScale, point};
use fa_core::grid::GrayGrid;
use fa_core::ramp::DensityRamp;
use fa_core::render::glyph_art;
use fa_source::resize::Resizer;

use crate::error::FontError;

/// Rasterizes single glyphs onto a white canvas, black ink, centered.
///
/// The canvas is twice the requested pixel size so the Lanczos
/// downsampling step has quality headroom.
pub struct GlyphRasterizer<'a> {
    font: FontRef<'a>,
    scale: PxScale,
    canvas: u32,
}

impl<'a> GlyphRasterizer<'a> {
    /// Build a rasterizer over raw font bytes at `size_px`.
    ///
    /// # Errors
    /// Returns [`FontError::Parse`] if the bytes are not a usable font.
    pub fn new(font_data: &'a [u8], size_px: f32) -> Result<Self, FontError> {
        let font = FontRef::try_from_slice(font_data)
            .map_err(|e| FontError::Parse(e.to_string()))?;
        let canvas = ((size_px * 2.0).ceil() as u32).max(1);
        Ok(Self {
            font,
            scale: PxScale::from(size_px),
            canvas,
        })
    }

    /// Canvas edge length in pixels.
    #[must_use]
    pub fn canvas_size(&self) -> u32 {
        self.canvas
    }

    /// Render one character: white background (255), glyph coverage as
    /// ink darkness, bounding box centered on the canvas.
    ///
    /// A glyph with no outline (space and friends) yields a fully white
    /// canvas, which is valid art, not a failure.
    ///
    /// # Errors
    /// Returns [`FontError::MissingGlyph`] when the font maps the
    /// character to `.notdef`.
    pub fn rasterize(&self, ch: char) -> Result<GrayGrid, FontError> {
        let glyph_id = self.font.glyph_id(ch);
        if glyph_id.0 == 0 {
            return Err(FontError::MissingGlyph { ch });
        }

        let mut grid = GrayGrid::filled(self.canvas, self.canvas, 255);
        let glyph = glyph_id.with_scale_and_position(self.scale, point(0.0, 0.0));
        let Some(outline) = self.font.outline_glyph(glyph) else {
            return Ok(grid);
        };

        let bounds = outline.px_bounds();
        let bbox_w = (bounds.max.x - bounds.min.x).ceil() as i64;
        let bbox_h = (bounds.max.y - bounds.min.y).ceil() as i64;
        let offset_x = (i64::from(self.canvas) - bbox_w) / 2;
        let offset_y = (i64::from(self.canvas) - bbox_h) / 2;

        let canvas = i64::from(self.canvas);
        outline.draw(|x, y, v| {
            let px = i64::from(x) + offset_x;
            let py = i64::from(y) + offset_y;
            if (0..canvas).contains(&px) && (0..canvas).contains(&py) {
                let idx = (py * canvas + px) as usize;
                let ink = 255 - (v.clamp(0.0, 1.0) * 255.0).round() as u8;
                // Keep the darkest value where coverage callbacks overlap.
                grid.data[idx] = grid.data[idx].min(ink);
            }
        });
        Ok(grid)
    }

    /// Full per-character pipeline: rasterize, downsample to the art grid,
    /// map to ramp characters. One art line per row.
    ///
    /// # Errors
    /// Per-character failures only: [`FontError::MissingGlyph`] or
    /// [`FontError::Sample`]. Callers continue with the next character.
    pub fn ascii_art(
        &self,
        ch: char,
        art_width: u32,
        art_height: u32,
        ramp: &DensityRamp,
    ) -> Result<Vec<String>, FontError> {
        let canvas = self.rasterize(ch)?;
        let mut scaled = GrayGrid::new(art_width.max(1), art_height.max(1));
        Resizer::new()
            .resize_gray_into(&canvas, &mut scaled)
            .map_err(|e| FontError::Sample {
                ch,
                reason: format!("{e:#}"),
            })?;
        Ok(glyph_art(&scaled, ramp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_canvas_maps_to_spaces() {
        // The downsample-and-map half of the pipeline on a white canvas:
        // every cell must be the ramp's lightest character.
        let ramp = DensityRamp::new(fa_core::ramp::RAMP_GLYPH).unwrap();
        let canvas = GrayGrid::filled(96, 96, 255);
        let mut scaled = GrayGrid::new(12, 12);
        Resizer::new().resize_gray_into(&canvas, &mut scaled).unwrap();
        let art = glyph_art(&scaled, &ramp);
        assert_eq!(art.len(), 12);
        assert!(art.iter().all(|row| row == "            "));
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        assert!(matches!(
            GlyphRasterizer::new(&[0u8; 16], 48.0),
            Err(FontError::Parse(_))
        ));
    }
}
