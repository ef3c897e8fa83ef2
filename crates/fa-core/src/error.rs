use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Density ramp shorter than the two-character minimum.
    #[error("Density ramp too short: {len} characters (minimum 2)")]
    RampTooShort {
        /// Effective ramp length after truncation.
        len: usize,
    },

    /// Contrast value outside the calibrated -10..=10 range.
    #[error("Contrast out of range: {contrast} (expected -10..=10)")]
    ContrastOutOfRange {
        /// The rejected contrast value.
        contrast: i8,
    },
}
