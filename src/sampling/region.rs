//! Bottom-band region selection for footer colors

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::raster::CropRect;

/// A horizontally centered band along the bottom edge of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottomRegion {
    /// Band height in pixels; clamped to the image height
    pub height: u32,
    /// Band width in pixels; `None` spans the full width
    pub max_width: Option<u32>,
}

impl Default for BottomRegion {
    fn default() -> Self {
        Self::new(defaults::BOTTOM_CROP_HEIGHT)
    }
}

impl BottomRegion {
    /// Full-width band of the given height
    pub fn new(height: u32) -> Self {
        Self { height, max_width: None }
    }

    /// Limit the band to a centered slice
    pub fn with_max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Crop rectangle for an image of `width × height`
    ///
    /// Returns `None` when the band or the image is empty.
    pub fn crop_rect(&self, width: u32, height: u32) -> Option<CropRect> {
        if self.height == 0 || width == 0 || height == 0 {
            return None;
        }

        let band_height = self.height.min(height);
        let band_width = self.max_width.map_or(width, |w| w.min(width));
        if band_width == 0 {
            return None;
        }

        Some(CropRect {
            x: (width - band_width) / 2,
            y: height - band_height,
            width: band_width,
            height: band_height,
        })
    }
}
