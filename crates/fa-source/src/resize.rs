use anyhow::{Context, Result};
use fa_core::grid::{GrayGrid, RgbGrid};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};

/// Resizer réutilisable wrappant fast_image_resize.
///
/// Lanczos3 convolution for both pixel types, so the gray and RGB grids of
/// one image go through the identical filter. Nearest-neighbor would alias
/// badly at the shrink ratios both tools use.
///
/// # Example
/// ```
/// use fa_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch buffer for the source (the resize API wants &mut on it).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new Lanczos3 resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3)),
            src_buf: Vec::new(),
        }
    }

    /// Resize a grayscale grid into `dst`. Dimensions of `dst` determine
    /// output size.
    ///
    /// # Errors
    /// Returns an error if the resize operation fails.
    ///
    /// # Example
    /// ```
    /// use fa_core::grid::GrayGrid;
    /// use fa_source::resize::Resizer;
    /// let mut r = Resizer::new();
    /// let src = GrayGrid::filled(100, 100, 255);
    /// let mut dst = GrayGrid::new(12, 12);
    /// r.resize_gray_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_gray_into(&mut self, src: &GrayGrid, dst: &mut GrayGrid) -> Result<()> {
        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }
        self.resize_raw(
            &src.data,
            src.width,
            src.height,
            &mut dst.data,
            dst.width,
            dst.height,
            PixelType::U8,
        )
    }

    /// Resize an RGB grid into `dst`. Same filter as the grayscale path.
    ///
    /// # Errors
    /// Returns an error if the resize operation fails.
    pub fn resize_rgb_into(&mut self, src: &RgbGrid, dst: &mut RgbGrid) -> Result<()> {
        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }
        self.resize_raw(
            &src.data,
            src.width,
            src.height,
            &mut dst.data,
            dst.width,
            dst.height,
            PixelType::U8x3,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn resize_raw(
        &mut self,
        src: &[u8],
        src_w: u32,
        src_h: u32,
        dst: &mut [u8],
        dst_w: u32,
        dst_h: u32,
        pixel_type: PixelType,
    ) -> Result<()> {
        // Forced copy: the resize API requires &mut on the source slice.
        self.src_buf.clear();
        self.src_buf.extend_from_slice(src);

        let src_image = Image::from_slice_u8(src_w, src_h, &mut self.src_buf, pixel_type)
            .context("Invalid source dimensions")?;
        let mut dst_image =
            Image::from_slice_u8(dst_w, dst_h, dst, pixel_type).context("Invalid destination dimensions")?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;
        Ok(())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot grayscale resize.
///
/// # Errors
/// Returns an error if the resize operation fails.
///
/// # Example
/// ```
/// use fa_core::grid::GrayGrid;
/// use fa_source::resize::resize_gray;
/// let src = GrayGrid::filled(96, 96, 255);
/// let dst = resize_gray(&src, 12, 12).unwrap();
/// assert_eq!(dst.width, 12);
/// ```
pub fn resize_gray(src: &GrayGrid, width: u32, height: u32) -> Result<GrayGrid> {
    let mut dst = GrayGrid::new(width, height);
    Resizer::new().resize_gray_into(src, &mut dst)?;
    Ok(dst)
}

/// One-shot RGB resize.
///
/// # Errors
/// Returns an error if the resize operation fails.
pub fn resize_rgb(src: &RgbGrid, width: u32, height: u32) -> Result<RgbGrid> {
    let mut dst = RgbGrid::new(width, height);
    Resizer::new().resize_rgb_into(src, &mut dst)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_gray_survives_lanczos() {
        // A constant field must stay constant through a normalized filter.
        let src = GrayGrid::filled(20, 10, 255);
        let dst = resize_gray(&src, 5, 3).unwrap();
        assert!(dst.data.iter().all(|&p| p == 255));
    }

    #[test]
    fn uniform_rgb_survives_lanczos() {
        let src = RgbGrid::from_raw(8, 8, vec![255u8; 8 * 8 * 3]);
        let dst = resize_rgb(&src, 2, 2).unwrap();
        assert!(dst.data.iter().all(|&p| p == 255));
    }

    #[test]
    fn same_size_is_a_copy() {
        let mut src = GrayGrid::new(4, 4);
        src.data[7] = 91;
        let dst = resize_gray(&src, 4, 4).unwrap();
        assert_eq!(dst.data, src.data);
    }
}
