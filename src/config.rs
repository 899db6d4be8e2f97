//! Configuration structures for the theme_color analysis pipeline.
//!
//! This module defines every tunable parameter of the analysis, grouped by
//! the component that consumes it.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use theme_color::AnalysisConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AnalysisConfig::from_json_file(Path::new("theme.json"))?;
//!
//! // Or build one; the grid is always chosen explicitly
//! let config = AnalysisConfig::with_grid(9);
//! # Ok::<(), theme_color::AnalysisError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`SamplingConfig`]: grid resolution and averaging strategy
//! - [`ClusteringConfig`]: similarity threshold for grouping samples
//! - [`SaturationConfig`]: saturation floor for the dominant color
//! - [`RegionConfig`]: bottom band used for footer colors
//! - [`LuminanceConfig`]: light/dark threshold

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::defaults;
use crate::sampling::{AverageMode, BottomRegion};
use crate::{AnalysisError, Result, Rgba};

/// Complete analysis configuration.
///
/// Only `sampling.grid` is required in JSON; every other field falls back to
/// the values in [`crate::constants::defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sampling configuration
    pub sampling: SamplingConfig,

    /// Clustering configuration
    #[serde(default)]
    pub clustering: ClusteringConfig,

    /// Saturation configuration
    #[serde(default)]
    pub saturation: SaturationConfig,

    /// Bottom region configuration
    #[serde(default)]
    pub region: RegionConfig,

    /// Luminance configuration
    #[serde(default)]
    pub luminance: LuminanceConfig,

    /// Color returned when no value can be derived
    #[serde(default = "default_fallback")]
    pub fallback: Rgba,
}

/// Sampling parameters.
///
/// The grid is the side of the square the image is rendered to before
/// clustering; it has no default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Grid side for dominant-color sampling (grid × grid samples)
    pub grid: u32,

    /// How whole-image and region averages are computed
    #[serde(default)]
    pub average_mode: AverageMode,
}

/// Clustering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Per-channel tolerance for a sample to join a bucket (0.0-1.0)
    pub similarity_threshold: f64,
}

/// Saturation adjustment parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaturationConfig {
    /// Saturation floor applied to the dominant color (0.0-1.0)
    pub minimum: f64,
}

/// Bottom band parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    /// Band height in pixels
    pub bottom_height: u32,

    /// Centered band width in pixels; full width when absent
    #[serde(default)]
    pub max_width: Option<u32>,
}

/// Luminance classification parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuminanceConfig {
    /// Relative luminance above which a color is light (0.0-1.0)
    pub threshold: f64,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self { similarity_threshold: defaults::SIMILARITY_THRESHOLD }
    }
}

impl Default for SaturationConfig {
    fn default() -> Self {
        Self { minimum: defaults::MIN_SATURATION }
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            bottom_height: defaults::BOTTOM_CROP_HEIGHT,
            max_width: None,
        }
    }
}

impl Default for LuminanceConfig {
    fn default() -> Self {
        Self { threshold: defaults::LUMINANCE_THRESHOLD }
    }
}

impl RegionConfig {
    pub fn bottom_region(&self) -> BottomRegion {
        BottomRegion {
            height: self.bottom_height,
            max_width: self.max_width,
        }
    }
}

fn default_fallback() -> Rgba {
    Rgba::TRANSPARENT
}

impl AnalysisConfig {
    /// Configuration with the given grid and default values elsewhere
    pub fn with_grid(grid: u32) -> Self {
        Self {
            sampling: SamplingConfig {
                grid,
                average_mode: AverageMode::default(),
            },
            clustering: ClusteringConfig::default(),
            saturation: SaturationConfig::default(),
            region: RegionConfig::default(),
            luminance: LuminanceConfig::default(),
            fallback: default_fallback(),
        }
    }

    /// Check every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.sampling.grid == 0 {
            return Err(AnalysisError::invalid_parameter("sampling.grid", self.sampling.grid));
        }

        check_unit("clustering.similarity_threshold", self.clustering.similarity_threshold)?;
        check_unit("saturation.minimum", self.saturation.minimum)?;
        check_unit("luminance.threshold", self.luminance.threshold)?;

        if self.region.bottom_height == 0 {
            return Err(AnalysisError::invalid_parameter("region.bottom_height", 0));
        }
        if self.region.max_width == Some(0) {
            return Err(AnalysisError::invalid_parameter("region.max_width", 0));
        }
        if self.fallback.srgb_components().is_none() {
            return Err(AnalysisError::invalid_parameter(
                "fallback",
                format!("{:?}", self.fallback),
            ));
        }

        Ok(())
    }

    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            AnalysisError::config(format!("Failed to parse {}", path.display()), e)
        })?;

        if let Err(e) = config.validate() {
            log::warn!("rejecting configuration {}: {}", path.display(), e);
            return Err(e);
        }
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(format!("Failed to write {}", path.display()), e)
        })
    }
}

fn check_unit(parameter: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AnalysisError::invalid_parameter(parameter, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_grid_defaults() {
        let config = AnalysisConfig::with_grid(9);
        assert_eq!(config.sampling.grid, 9);
        assert_eq!(config.sampling.average_mode, AverageMode::BoxFilter);
        assert_eq!(config.clustering.similarity_threshold, 0.1);
        assert_eq!(config.saturation.minimum, 0.15);
        assert_eq!(config.region.bottom_height, 100);
        assert_eq!(config.region.max_width, None);
        assert_eq!(config.luminance.threshold, 0.70);
        assert_eq!(config.fallback, Rgba::TRANSPARENT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_grid() {
        match AnalysisConfig::with_grid(0).validate() {
            Err(AnalysisError::InvalidParameter { parameter, .. }) => {
                assert_eq!(parameter, "sampling.grid");
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_thresholds() {
        let mut config = AnalysisConfig::with_grid(4);
        config.clustering.similarity_threshold = -0.1;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::with_grid(4);
        config.luminance.threshold = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::with_grid(4);
        config.saturation.minimum = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_region_and_fallback() {
        let mut config = AnalysisConfig::with_grid(4);
        config.region.max_width = Some(0);
        assert!(config.validate().is_err());

        let mut config = AnalysisConfig::with_grid(4);
        config.fallback = Rgba { r: 2.0, g: 0.0, b: 0.0, a: 1.0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_minimal_json_takes_defaults() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{ "sampling": { "grid": 4 } }"#).unwrap();
        assert_eq!(config, AnalysisConfig::with_grid(4));
    }

    #[test]
    fn test_json_requires_grid() {
        let parsed: std::result::Result<AnalysisConfig, _> =
            serde_json::from_str(r#"{ "sampling": {} }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_average_mode_names() {
        let config: AnalysisConfig = serde_json::from_str(
            r#"{ "sampling": { "grid": 4, "average_mode": "nearest_pixel" } }"#,
        )
        .unwrap();
        assert_eq!(config.sampling.average_mode, AverageMode::NearestPixel);
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");

        let mut config = AnalysisConfig::with_grid(6);
        config.region.max_width = Some(320);
        config.to_json_file(&path).unwrap();

        assert_eq!(AnalysisConfig::from_json_file(&path).unwrap(), config);
    }

    #[test]
    fn test_from_json_file_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            AnalysisConfig::from_json_file(&missing),
            Err(AnalysisError::ConfigError { .. })
        ));

        let invalid = dir.path().join("invalid.json");
        std::fs::write(&invalid, r#"{ "sampling": { "grid": 0 } }"#).unwrap();
        assert!(matches!(
            AnalysisConfig::from_json_file(&invalid),
            Err(AnalysisError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_bottom_region_from_config() {
        let mut config = AnalysisConfig::with_grid(4);
        config.region.bottom_height = 40;
        config.region.max_width = Some(80);
        assert_eq!(
            config.region.bottom_region(),
            BottomRegion::new(40).with_max_width(80)
        );
    }
}
