//! Grid sampling and averaging over a [`PixelSource`]
//!
//! Reduces an image to a handful of colors:
//! - `sample`: a nearest-neighbor grid, one color per cell in row-major order
//! - `average_color`: a single color for the whole image
//! - `sample_region`: a single color for the bottom band
//! - `scaled_copy`: a bounded-size copy for cheaper later sampling
//!
//! Render failures are not errors here. They are logged and surface as an
//! empty sequence or `None`.

use serde::{Deserialize, Serialize};

use super::BottomRegion;
use crate::raster::{PixelSource, RasterImage};
use crate::Rgba;

/// How a whole image is reduced to one color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AverageMode {
    /// Render to 1×1 with nearest-neighbor, keeping one representative pixel
    NearestPixel,
    /// Arithmetic mean over every pixel of a full-size render
    #[default]
    BoxFilter,
}

/// Image sampler with a configurable averaging strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    average_mode: AverageMode,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler {
    /// Create a sampler that averages with a true mean
    pub fn new() -> Self {
        Self::with_mode(AverageMode::BoxFilter)
    }

    /// Create a sampler with the given averaging strategy
    pub fn with_mode(average_mode: AverageMode) -> Self {
        Self { average_mode }
    }

    pub fn average_mode(&self) -> AverageMode {
        self.average_mode
    }

    /// Render `image` to a `width × height` grid and return its colors
    ///
    /// The result has `width * height` entries in row-major order, or is
    /// empty if the image cannot be rendered.
    pub fn sample<I>(&self, image: &I, width: u32, height: u32) -> Vec<Rgba>
    where
        I: PixelSource + ?Sized,
    {
        match image.render(width, height) {
            Ok(buffer) => buffer.colors(),
            Err(e) => {
                log::debug!("grid sampling at {}x{} failed: {}", width, height, e);
                Vec::new()
            }
        }
    }

    /// One color standing for the whole image
    ///
    /// `BoxFilter` renders the image at its own size and averages every
    /// pixel, so no detail is skipped. `NearestPixel` keeps the single pixel a
    /// 1×1 nearest-neighbor render picks.
    pub fn average_color<I>(&self, image: &I) -> Option<Rgba>
    where
        I: PixelSource + ?Sized,
    {
        match self.average_mode {
            AverageMode::NearestPixel => self.sample(image, 1, 1).into_iter().next(),
            AverageMode::BoxFilter => self.mean_color(image),
        }
    }

    /// One color for the bottom band of the image
    ///
    /// Only the rows of the band are read. Returns `None` for an empty band
    /// or when cropping or rendering fails.
    pub fn sample_region<I>(&self, image: &I, region: &BottomRegion) -> Option<Rgba>
    where
        I: PixelSource,
    {
        let (width, height) = image.dimensions();
        let rect = region.crop_rect(width, height)?;

        let cropped = match image.crop(rect) {
            Ok(cropped) => cropped,
            Err(e) => {
                log::debug!("region crop {:?} failed: {}", rect, e);
                return None;
            }
        };
        self.average_color(&cropped)
    }

    /// Copy of `image` whose longest side is at most `max_side`
    ///
    /// Aspect ratio is preserved and images are never enlarged. Returns
    /// `None` if `max_side` is zero or rendering fails.
    pub fn scaled_copy<I>(&self, image: &I, max_side: u32) -> Option<RasterImage>
    where
        I: PixelSource + ?Sized,
    {
        let (width, height) = image.dimensions();
        let (target_width, target_height) = scaled_dimensions(width, height, max_side)?;

        image
            .render(target_width, target_height)
            .and_then(RasterImage::from_buffer)
            .map_err(|e| log::debug!("scaled copy to {}x{} failed: {}", target_width, target_height, e))
            .ok()
    }

    fn mean_color<I>(&self, image: &I) -> Option<Rgba>
    where
        I: PixelSource + ?Sized,
    {
        let (width, height) = image.dimensions();

        match image.render(width, height) {
            Ok(buffer) => Some(buffer.mean_color()),
            Err(e) => {
                log::debug!("average over {}x{} failed: {}", width, height, e);
                None
            }
        }
    }
}

/// Target size for fitting `width × height` inside a `max_side` square
///
/// Each side is truncated and kept at least one pixel. Returns `None` for an
/// empty image or a zero `max_side`.
pub fn scaled_dimensions(width: u32, height: u32, max_side: u32) -> Option<(u32, u32)> {
    if width == 0 || height == 0 || max_side == 0 {
        return None;
    }

    let longest = width.max(height);
    if longest <= max_side {
        return Some((width, height));
    }

    let scale = |side: u32| ((side as u64 * max_side as u64 / longest as u64) as u32).max(1);
    Some((scale(width), scale(height)))
}
