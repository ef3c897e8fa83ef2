/// Density mapping, color escapes, and shared pixel-grid types for fontascii.
///
/// This crate is the pure algorithmic core shared by both tools: the
/// brightness→character mapping policies, the truecolor annotator, and the
/// grid types the samplers produce. No I/O lives here.

pub mod color;
pub mod error;
pub mod grid;
pub mod ramp;
pub mod render;

pub use error::CoreError;
pub use grid::{GrayGrid, RgbGrid};
pub use ramp::{DensityRamp, MappingPolicy, map_brightness};
