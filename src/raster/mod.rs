//! Image access module
//!
//! Defines the [`PixelSource`] capability the sampler renders through, the
//! intermediate [`PixelBuffer`], and the `image`-crate backed
//! [`RasterImage`].

pub mod buffer;
pub mod source;
pub mod loader;

pub use buffer::PixelBuffer;
pub use source::{CropRect, PixelSource};
pub use loader::{is_supported_extension, supported_extensions, RasterImage};
