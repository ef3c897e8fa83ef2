use crate::error::CoreError;

/// 9 caractères, du plus clair au plus dense. Utilisé pour l'art des glyphes.
pub const RAMP_GLYPH: &str = " .:-+*#%@";

/// 81 characters, densest to sparsest, ending in a run of 12 spaces.
///
/// Historical calibration for the image renderer. The trailing spaces are
/// intentional: the contrast truncation in [`DensityRamp::with_contrast`]
/// trims from this end.
pub const RAMP_IMAGE: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'.            ";

/// Selects which end of the ramp dark samples map to.
///
/// Both conventions are load-bearing: the glyph renderer draws dark ink on
/// white paper, the image renderer draws bright areas on a dark terminal.
/// They use different index arithmetic and neither may be "unified".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MappingPolicy {
    /// `idx = (255 - s) * (n - 1) / 255`, select `ramp[idx]`.
    ///
    /// Dark samples land at the tail of a lightest→densest ramp
    /// ([`RAMP_GLYPH`]).
    DarkToDenseTail,
    /// `k = s * n / 256` clamped to `n - 1`, select `ramp[n - 1 - k]`.
    ///
    /// Bright samples land at the head of a densest→sparsest ramp
    /// ([`RAMP_IMAGE`]).
    BrightToDenseHead,
}

/// Ordered, non-empty density ramp.
///
/// # Example
/// ```
/// use fa_core::ramp::{DensityRamp, RAMP_GLYPH};
/// let ramp = DensityRamp::new(RAMP_GLYPH).unwrap();
/// assert_eq!(ramp.len(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct DensityRamp {
    chars: Vec<char>,
}

impl DensityRamp {
    /// Build a ramp from an ordered character string.
    ///
    /// # Errors
    /// Returns [`CoreError::RampTooShort`] for fewer than 2 characters.
    pub fn new(charset: &str) -> Result<Self, CoreError> {
        let chars: Vec<char> = charset.chars().collect();
        if chars.len() < 2 {
            return Err(CoreError::RampTooShort { len: chars.len() });
        }
        Ok(Self { chars })
    }

    /// Build a ramp truncated by the image renderer's contrast parameter.
    ///
    /// Keeps the first `len - (11 - contrast)` characters. At contrast 10
    /// exactly one trailing character is removed; at -10, twenty-one. The
    /// arithmetic is part of the historical visual calibration and must be
    /// preserved as-is, off-by-one feel included.
    ///
    /// # Errors
    /// Returns [`CoreError::ContrastOutOfRange`] outside -10..=10, or
    /// [`CoreError::RampTooShort`] if truncation leaves fewer than 2
    /// characters.
    ///
    /// # Example
    /// ```
    /// use fa_core::ramp::{DensityRamp, RAMP_IMAGE};
    /// let ramp = DensityRamp::with_contrast(RAMP_IMAGE, 10).unwrap();
    /// assert_eq!(ramp.len(), 80);
    /// ```
    pub fn with_contrast(charset: &str, contrast: i8) -> Result<Self, CoreError> {
        if !(-10..=10).contains(&contrast) {
            return Err(CoreError::ContrastOutOfRange { contrast });
        }
        let chars: Vec<char> = charset.chars().collect();
        let trim = (11 - i32::from(contrast)) as usize;
        let keep = chars.len().checked_sub(trim).unwrap_or(0);
        if keep < 2 {
            return Err(CoreError::RampTooShort { len: keep });
        }
        Ok(Self {
            chars: chars[..keep].to_vec(),
        })
    }

    /// Number of characters in the (possibly truncated) ramp.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: construction enforces a minimum of 2 characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `idx`. Caller guarantees `idx < len()`.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, idx: usize) -> char {
        self.chars[idx]
    }
}

/// Map a brightness sample [0..255] to one ramp character.
///
/// Pure: no color, no state. The two policies keep their exact index
/// arithmetic (see [`MappingPolicy`]).
///
/// # Example
/// ```
/// use fa_core::ramp::{map_brightness, DensityRamp, MappingPolicy, RAMP_GLYPH};
/// let ramp = DensityRamp::new(RAMP_GLYPH).unwrap();
/// assert_eq!(map_brightness(255, &ramp, MappingPolicy::DarkToDenseTail), ' ');
/// assert_eq!(map_brightness(0, &ramp, MappingPolicy::DarkToDenseTail), '@');
/// ```
#[inline(always)]
#[must_use]
pub fn map_brightness(sample: u8, ramp: &DensityRamp, policy: MappingPolicy) -> char {
    let n = ramp.len();
    match policy {
        MappingPolicy::DarkToDenseTail => {
            let idx = (255 - sample as usize) * (n - 1) / 255;
            ramp.get(idx)
        }
        MappingPolicy::BrightToDenseHead => {
            let k = (sample as usize * n / 256).min(n - 1);
            ramp.get(n - 1 - k)
        }
    }
}
