//! # Theme Color
//!
//! A Rust crate for deriving representative colors from images for UI theming.
//!
//! This library picks background and text colors by:
//! - Sampling an image onto a small nearest-neighbor grid
//! - Grouping samples by per-channel similarity and keeping the most frequent group
//! - Raising the winner's saturation to a configurable floor
//! - Classifying colors as light or dark by relative luminance
//!
//! ## Example
//!
//! ```rust,no_run
//! use theme_color::{analyze_image, AnalysisConfig};
//! use std::path::Path;
//!
//! let report = analyze_image(Path::new("cover.jpg"), &AnalysisConfig::with_grid(9))?;
//! println!("Background: {}, light: {}", report.hex, report.is_light);
//! # Ok::<(), theme_color::AnalysisError>(())
//! ```

use std::path::Path;

pub mod error;
pub mod constants;
pub mod config;
pub mod color;
pub mod raster;
pub mod sampling;
pub mod analysis;

pub use error::{AnalysisError, Result};
pub use config::AnalysisConfig;
pub use color::{Hsb, Rgba, TextTone};
pub use raster::{CropRect, PixelBuffer, PixelSource, RasterImage};
pub use sampling::{AverageMode, BottomRegion, Sampler};
pub use analysis::{ThemeAnalyzer, ThemeReport};

/// Analyze the dominant theme color of an image file
///
/// This is the main entry point for file-based use. It decodes the image
/// and runs the full dominant-color pipeline with `config`.
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - The configuration is invalid
/// - The image cannot be opened or decoded
///
/// An image that decodes but cannot be sampled is not an error: the report
/// carries the configured fallback color and `used_fallback` is set.
pub fn analyze_image(image_path: &Path, config: &AnalysisConfig) -> Result<ThemeReport> {
    let analyzer = ThemeAnalyzer::new(config.clone())?;
    let image = RasterImage::open(image_path)?;
    Ok(analyzer.analyze(&image))
}

/// Average color of the bottom band of an image file, or the fallback
pub fn bottom_color_of(image_path: &Path, config: &AnalysisConfig) -> Result<Rgba> {
    let analyzer = ThemeAnalyzer::new(config.clone())?;
    let image = RasterImage::open(image_path)?;
    Ok(analyzer.corrected_bottom_color(&image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_report_serialization() {
        let color = Rgba::opaque(0.2, 0.4, 0.8).unwrap();
        let report = ThemeReport {
            color,
            hex: color.to_hex(),
            luminance: 0.1,
            is_light: false,
            text_tone: TextTone::Light,
            sample_count: 81,
            cluster_count: 3,
            dominant_share: 0.6,
            used_fallback: false,
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"text_tone\":\"light\""));
        let deserialized: ThemeReport = serde_json::from_str(&json).unwrap();

        assert_eq!(report, deserialized);
    }

    #[test]
    fn test_analyze_image_file_not_found() {
        let result = analyze_image(Path::new("nonexistent_file.png"), &AnalysisConfig::with_grid(4));
        assert!(matches!(result, Err(AnalysisError::ImageLoadError { .. })));
    }

    #[test]
    fn test_analyze_image_rejects_config_first() {
        let result = analyze_image(Path::new("nonexistent_file.png"), &AnalysisConfig::with_grid(0));
        assert!(matches!(result, Err(AnalysisError::InvalidParameter { .. })));
    }
}
