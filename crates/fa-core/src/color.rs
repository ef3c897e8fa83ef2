use std::fmt::Write;

/// Reset sequence paired with every activation.
pub const RESET: &str = "\x1b[0m";

/// 24-bit truecolor foreground activation for one RGB triple.
///
/// # Example
/// ```
/// use fa_core::color::fg_truecolor;
/// assert_eq!(fg_truecolor(255, 0, 0), "\x1b[38;2;255;0;0m");
/// ```
#[must_use]
pub fn fg_truecolor(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

/// Append an activation sequence to `out` without allocating a new String.
///
/// Used by the renderer hot loop; one activation/reset pair per cell,
/// no run-length merging of identical adjacent colors.
#[inline]
pub fn push_fg(out: &mut String, r: u8, g: u8, b: u8) {
    // Writing to a String cannot fail.
    let _ = write!(out, "\x1b[38;2;{r};{g};{b}m");
}
