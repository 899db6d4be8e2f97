//! The image capability consumed by the sampler

use serde::{Deserialize, Serialize};

use super::PixelBuffer;
use crate::{AnalysisError, Result};

/// Sub-rectangle of an image in source pixels, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether the rectangle is non-empty and lies inside a `width × height` image
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.x.checked_add(self.width).is_some_and(|right| right <= width)
            && self.y.checked_add(self.height).is_some_and(|bottom| bottom <= height)
    }

    /// Rows covered by this rectangle
    pub fn rows(&self) -> std::ops::Range<u32> {
        self.y..self.y + self.height
    }
}

/// An image that can render itself to an RGBA8 grid
///
/// Rendering must use nearest-neighbor resampling: every output pixel is a
/// copy of one source pixel, never a blend.
pub trait PixelSource {
    /// Width and height in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Render to a `width × height` buffer
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for a zero-sized target and
    /// `UnreadableImage` when the image has no pixel data.
    fn render(&self, width: u32, height: u32) -> Result<PixelBuffer>;

    /// Restrict the image to `rect`
    ///
    /// Sources that cannot crop keep this default, which reports the image
    /// as unreadable for region queries.
    fn crop(&self, rect: CropRect) -> Result<Self>
    where
        Self: Sized,
    {
        Err(AnalysisError::UnreadableImage {
            reason: format!("cropping to {:?} is not supported by this source", rect),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_within() {
        assert!(CropRect::new(0, 200, 200, 100).fits_within(200, 300));
        assert!(!CropRect::new(0, 201, 200, 100).fits_within(200, 300));
        assert!(!CropRect::new(1, 0, 200, 100).fits_within(200, 300));
        assert!(!CropRect::new(0, 0, 0, 100).fits_within(200, 300));
        assert!(!CropRect::new(u32::MAX, 0, 2, 1).fits_within(200, 300));
    }

    #[test]
    fn test_rows() {
        assert_eq!(CropRect::new(0, 200, 200, 100).rows(), 200..300);
    }

    #[test]
    fn test_default_crop_is_unsupported() {
        struct Flat;

        impl PixelSource for Flat {
            fn dimensions(&self) -> (u32, u32) {
                (1, 1)
            }

            fn render(&self, width: u32, height: u32) -> Result<PixelBuffer> {
                PixelBuffer::new(width, height, vec![0; (width * height * 4) as usize])
            }
        }

        let err = Flat.crop(CropRect::new(0, 0, 1, 1)).err().unwrap();
        assert!(err.is_recoverable());
    }
}
