use thiserror::Error;

/// Errors from font parsing and glyph rasterization.
///
/// `MissingGlyph` and `Sample` are per-character failures: callers catch
/// them around the rasterize-and-sample step only and continue with the
/// next character.
#[derive(Error, Debug)]
pub enum FontError {
    /// The font file could not be parsed at all. Per-file failure.
    #[error("Error reading TTF file: {0}")]
    Parse(String),

    /// The font has no outline for this character. Per-character failure.
    #[error("No glyph for '{ch}' in this font")]
    MissingGlyph {
        /// The character that failed.
        ch: char,
    },

    /// Downsampling the rasterized canvas failed. Per-character failure.
    #[error("Downsampling failed for '{ch}': {reason}")]
    Sample {
        /// The character that failed.
        ch: char,
        /// Underlying resize error, flattened for display.
        reason: String,
    },
}
