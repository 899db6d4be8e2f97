//! Row-major RGBA8 pixel buffer produced by rendering an image

use crate::{AnalysisError, Result, Rgba};

/// Bytes per pixel in a [`PixelBuffer`] (R, G, B, A)
pub const BYTES_PER_PIXEL: usize = 4;

/// Rendered pixels, four bytes per pixel, rows top to bottom
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA8 bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either side is zero or the byte count
    /// is not `width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL));

        if width == 0 || height == 0 || expected != Some(data.len()) {
            return Err(AnalysisError::InvalidDimensions { width, height });
        }

        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at column `x`, row `y`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let bytes = &self.data[offset..offset + BYTES_PER_PIXEL];
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// One color per pixel in row-major order
    pub fn colors(&self) -> Vec<Rgba> {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|p| Rgba::from_rgba8([p[0], p[1], p[2], p[3]]))
            .collect()
    }

    /// Arithmetic mean of every pixel, channel by channel
    pub fn mean_color(&self) -> Rgba {
        let mut sums = [0u64; BYTES_PER_PIXEL];
        for pixel in self.data.chunks_exact(BYTES_PER_PIXEL) {
            for (sum, value) in sums.iter_mut().zip(pixel) {
                *sum += *value as u64;
            }
        }

        let count = (self.width as u64 * self.height as u64) as f64;
        let channel = |sum: u64| sum as f64 / count / 255.0;
        Rgba {
            r: channel(sums[0]),
            g: channel(sums[1]),
            b: channel(sums[2]),
            a: channel(sums[3]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_one() -> PixelBuffer {
        PixelBuffer::new(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).unwrap()
    }

    #[test]
    fn test_new_checks_length() {
        assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());
        assert!(PixelBuffer::new(2, 2, vec![0; 15]).is_err());
        assert!(PixelBuffer::new(0, 2, vec![]).is_err());
    }

    #[test]
    fn test_pixel_access() {
        let buffer = two_by_one();
        assert_eq!(buffer.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(buffer.pixel(1, 0), Some([0, 0, 255, 255]));
        assert_eq!(buffer.pixel(2, 0), None);
        assert_eq!(buffer.pixel(0, 1), None);
    }

    #[test]
    fn test_colors_row_major() {
        let colors = two_by_one().colors();
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(colors[1].to_rgba8(), [0, 0, 255, 255]);
    }

    #[test]
    fn test_mean_color() {
        let mean = two_by_one().mean_color();
        assert!((mean.r - 0.5).abs() < 1e-12);
        assert_eq!(mean.g, 0.0);
        assert!((mean.b - 0.5).abs() < 1e-12);
        assert_eq!(mean.a, 1.0);
    }
}
