//! Raster image backend built on the `image` crate
//!
//! [`RasterImage`] is the concrete [`PixelSource`] used by the library's
//! file-based entry points. It decodes anything the `image` crate can read,
//! keeps the pixels as straight-alpha RGBA8, and renders with
//! `FilterType::Nearest` so that no smoothing is applied.

use std::path::Path;

use image::{imageops, imageops::FilterType, DynamicImage, ImageReader, RgbaImage};

use super::{CropRect, PixelBuffer, PixelSource};
use crate::{AnalysisError, Result, Rgba};

/// Decoded image held in memory as RGBA8
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    /// Load and decode an image file
    ///
    /// The format is detected from the file contents, falling back to the
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ImageLoadError` if the file cannot be opened
    /// or decoded.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use theme_color::{PixelSource, RasterImage};
    /// use std::path::Path;
    ///
    /// let image = RasterImage::open(Path::new("cover.jpg"))?;
    /// println!("Loaded image: {:?}", image.dimensions());
    /// # Ok::<(), theme_color::AnalysisError>(())
    /// ```
    pub fn open(path: &Path) -> Result<Self> {
        let reader = ImageReader::open(path)
            .map_err(|e| {
                AnalysisError::image_load(
                    format!("Failed to open image file: {}", path.display()),
                    e,
                )
            })?
            .with_guessed_format()
            .map_err(|e| {
                AnalysisError::image_load(
                    format!("Failed to read image header: {}", path.display()),
                    e,
                )
            })?;

        let decoded = reader.decode().map_err(|e| {
            AnalysisError::image_load(format!("Failed to decode image: {}", path.display()), e)
        })?;

        log::debug!(
            "loaded {} ({}x{})",
            path.display(),
            decoded.width(),
            decoded.height()
        );
        Ok(Self::from_dynamic(decoded))
    }

    /// Take ownership of an already decoded image
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { pixels: image.into_rgba8() }
    }

    /// Wrap raw RGBA8 bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the byte count does not match.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        RgbaImage::from_raw(width, height, data)
            .map(|pixels| Self { pixels })
            .ok_or(AnalysisError::InvalidDimensions { width, height })
    }

    /// Adopt a rendered pixel buffer as an image
    pub fn from_buffer(buffer: PixelBuffer) -> Result<Self> {
        let (width, height) = (buffer.width(), buffer.height());
        Self::from_rgba8(width, height, buffer.into_raw())
    }

    /// Build an image by evaluating `color_at(x, y)` for every pixel
    pub fn from_fn(width: u32, height: u32, mut color_at: impl FnMut(u32, u32) -> Rgba) -> Self {
        Self {
            pixels: RgbaImage::from_fn(width, height, |x, y| image::Rgba(color_at(x, y).to_rgba8())),
        }
    }

    /// Image filled with one color
    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, image::Rgba(color.to_rgba8())),
        }
    }

    /// Encode to a file; the format follows the extension
    pub fn save(&self, path: &Path) -> Result<()> {
        self.pixels.save(path).map_err(|e| {
            AnalysisError::image_load(format!("Failed to write image: {}", path.display()), e)
        })
    }

    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl PixelSource for RasterImage {
    fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn render(&self, width: u32, height: u32) -> Result<PixelBuffer> {
        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidDimensions { width, height });
        }
        if self.pixels.width() == 0 || self.pixels.height() == 0 {
            return Err(AnalysisError::UnreadableImage {
                reason: "image has no pixels".into(),
            });
        }

        let rendered = if self.pixels.dimensions() == (width, height) {
            self.pixels.clone()
        } else {
            imageops::resize(&self.pixels, width, height, FilterType::Nearest)
        };
        PixelBuffer::new(width, height, rendered.into_raw())
    }

    fn crop(&self, rect: CropRect) -> Result<Self> {
        let (width, height) = self.dimensions();
        if !rect.fits_within(width, height) {
            return Err(AnalysisError::InvalidRegion {
                reason: format!("{:?} does not fit inside {}x{}", rect, width, height),
            });
        }

        let cropped = imageops::crop_imm(&self.pixels, rect.x, rect.y, rect.width, rect.height);
        Ok(Self { pixels: cropped.to_image() })
    }
}

/// File extensions `RasterImage::open` is expected to decode
pub fn supported_extensions() -> &'static [&'static str] {
    &[
        "jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp", "ico",
        "tga", "exr", "pbm", "pgm", "ppm", "pnm", "qoi", "dds", "hdr",
    ]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}
