/// Grille de pixels 8-bit grayscale, row-major, 1 byte par pixel.
///
/// # Example
/// ```
/// use fa_core::grid::GrayGrid;
/// let g = GrayGrid::new(10, 10);
/// assert_eq!(g.data.len(), 100);
/// ```
#[derive(Clone)]
pub struct GrayGrid {
    /// Brightness samples, row-major.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl GrayGrid {
    /// Create a grid filled with black (0).
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Create a grid filled with `value`.
    ///
    /// # Example
    /// ```
    /// use fa_core::grid::GrayGrid;
    /// let g = GrayGrid::filled(4, 4, 255);
    /// assert_eq!(g.sample(3, 3), 255);
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            data: vec![value; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Wrap an existing row-major buffer. Caller guarantees
    /// `data.len() == width * height`.
    #[must_use]
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self { data, width, height }
    }

    /// Brightness sample at (x, y).
    #[inline(always)]
    #[must_use]
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        // Widened before the multiply: width × height alone can exceed u32.
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Iterate rows as byte slices.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width.max(1) as usize)
    }
}

/// Grille de pixels RGB, row-major, 3 bytes par pixel.
///
/// Produced in parallel with a [`GrayGrid`] of identical dimensions so that
/// pixel (x, y) in both grids refers to the same spatial location.
#[derive(Clone)]
pub struct RgbGrid {
    /// RGB triples, row-major, 3 bytes per pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RgbGrid {
    /// Create a grid filled with black.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 3],
            width,
            height,
        }
    }

    /// Wrap an existing row-major buffer. Caller guarantees
    /// `data.len() == width * height * 3`.
    #[must_use]
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 3);
        Self { data, width, height }
    }

    /// RGB triple at (x, y).
    ///
    /// # Example
    /// ```
    /// use fa_core::grid::RgbGrid;
    /// let g = RgbGrid::new(2, 2);
    /// assert_eq!(g.pixel(1, 1), (0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        // Widened before the multiply: width × height × 3 overflows u32 for
        // images that are otherwise perfectly loadable.
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }
}
