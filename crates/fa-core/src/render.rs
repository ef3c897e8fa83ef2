use crate::color::{RESET, push_fg};
use crate::grid::{GrayGrid, RgbGrid};
use crate::ramp::{DensityRamp, MappingPolicy, map_brightness};

/// Render a sampled glyph grid as plain art lines, one String per row.
///
/// Uses [`MappingPolicy::DarkToDenseTail`]: dark ink on a white canvas
/// lands at the dense tail of a lightest→densest ramp.
///
/// # Example
/// ```
/// use fa_core::grid::GrayGrid;
/// use fa_core::ramp::{DensityRamp, RAMP_GLYPH};
/// use fa_core::render::glyph_art;
/// let ramp = DensityRamp::new(RAMP_GLYPH).unwrap();
/// let blank = GrayGrid::filled(4, 2, 255);
/// assert_eq!(glyph_art(&blank, &ramp), vec!["    ", "    "]);
/// ```
#[must_use]
pub fn glyph_art(gray: &GrayGrid, ramp: &DensityRamp) -> Vec<String> {
    gray.rows()
        .map(|row| {
            row.iter()
                .map(|&p| map_brightness(p, ramp, MappingPolicy::DarkToDenseTail))
                .collect()
        })
        .collect()
}

/// Render parallel gray/RGB grids as ANSI truecolor art, newline-terminated
/// rows.
///
/// Uses [`MappingPolicy::BrightToDenseHead`]. Every cell is independently
/// wrapped in an activation/reset pair, identical adjacent colors included.
#[must_use]
pub fn ansi_art(gray: &GrayGrid, rgb: &RgbGrid, ramp: &DensityRamp) -> String {
    debug_assert!(
        gray.width == rgb.width && gray.height == rgb.height,
        "gray/rgb grids must share dimensions"
    );
    // 20 bytes per cell covers the escape pair plus the glyph.
    let mut out = String::with_capacity(gray.width as usize * gray.height as usize * 20);
    for y in 0..gray.height {
        for x in 0..gray.width {
            let ch = map_brightness(gray.sample(x, y), ramp, MappingPolicy::BrightToDenseHead);
            let (r, g, b) = rgb.pixel(x, y);
            push_fg(&mut out, r, g, b);
            out.push(ch);
            out.push_str(RESET);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::{RAMP_GLYPH, RAMP_IMAGE};

    #[test]
    fn glyph_art_maps_ink_to_dense_tail() {
        let ramp = DensityRamp::new(RAMP_GLYPH).unwrap();
        let mut g = GrayGrid::filled(2, 1, 255);
        g.data[0] = 0;
        assert_eq!(glyph_art(&g, &ramp), vec!["@ "]);
    }

    #[test]
    fn all_white_image_renders_dense_head_per_cell() {
        // 2×2 fully white at max contrast: every cell is the effective
        // ramp's brightest glyph wrapped in a white activation + reset.
        let ramp = DensityRamp::with_contrast(RAMP_IMAGE, 10).unwrap();
        let gray = GrayGrid::filled(2, 2, 255);
        let rgb = RgbGrid::from_raw(2, 2, vec![255u8; 12]);
        let out = ansi_art(&gray, &rgb, &ramp);

        let cell = "\x1b[38;2;255;255;255m$\x1b[0m";
        let row = format!("{cell}{cell}\n");
        assert_eq!(out, format!("{row}{row}"));
    }

    #[test]
    fn ansi_art_wraps_every_cell_independently() {
        let ramp = DensityRamp::with_contrast(RAMP_IMAGE, 0).unwrap();
        let gray = GrayGrid::filled(3, 1, 128);
        let rgb = RgbGrid::from_raw(3, 1, vec![7u8; 9]);
        let out = ansi_art(&gray, &rgb, &ramp);
        // One activation and one reset per cell, even with identical colors.
        assert_eq!(out.matches("\x1b[38;2;7;7;7m").count(), 3);
        assert_eq!(out.matches("\x1b[0m").count(), 3);
    }
}
