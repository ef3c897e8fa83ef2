/// Image loading and Lanczos resampling for fontascii.
///
/// Wraps the `image` and `fast_image_resize` crates behind the grid types
/// from `fa-core`. The aspect-ratio rule for terminal rendering lives here
/// next to the resampler that enforces it.

pub mod image;
pub mod resize;

pub use image::{ImageSource, derived_height};
pub use resize::{Resizer, resize_gray, resize_rgb};
