//! Theme color pipeline
//!
//! Composes sampling, clustering, saturation and luminance into the
//! operations an application calls directly. Every `corrected_*` operation
//! returns a displayable color: when a step yields no value the configured
//! fallback is used instead.

use serde::{Deserialize, Serialize};

use crate::color::{self, ColorBucket, Rgba, TextTone};
use crate::config::AnalysisConfig;
use crate::raster::PixelSource;
use crate::sampling::Sampler;
use crate::Result;

/// Summary of one dominant-color analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeReport {
    /// Final color (saturation-adjusted dominant color, or the fallback)
    pub color: Rgba,
    /// Hexadecimal color representation
    pub hex: String,
    /// Relative luminance of `color`
    pub luminance: f64,
    /// Whether `color` is light under the configured threshold
    pub is_light: bool,
    /// Tone for text drawn over `color`
    pub text_tone: TextTone,
    /// Number of grid samples taken
    pub sample_count: usize,
    /// Number of buckets the samples formed
    pub cluster_count: usize,
    /// Fraction of samples in the winning bucket (0.0 when no samples)
    pub dominant_share: f64,
    /// True when no sample was available and `color` is the fallback
    pub used_fallback: bool,
}

/// Pipeline bound to one configuration
#[derive(Debug, Clone)]
pub struct ThemeAnalyzer {
    config: AnalysisConfig,
    sampler: Sampler,
}

impl ThemeAnalyzer {
    /// Create an analyzer after validating `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is unusable.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let sampler = Sampler::with_mode(config.sampling.average_mode);
        Ok(Self { config, sampler })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    /// Grid samples of `image` in row-major order
    pub fn samples<I>(&self, image: &I) -> Vec<Rgba>
    where
        I: PixelSource + ?Sized,
    {
        let grid = self.config.sampling.grid;
        self.sampler.sample(image, grid, grid)
    }

    /// Most frequent grid color with the saturation floor applied
    pub fn dominant_color<I>(&self, image: &I) -> Option<Rgba>
    where
        I: PixelSource + ?Sized,
    {
        let samples = self.samples(image);
        color::dominant(&samples, self.config.clustering.similarity_threshold)
            .map(|dominant| self.saturate(dominant))
    }

    /// Dominant color, or the fallback when the image yields no samples
    pub fn corrected_color<I>(&self, image: &I) -> Rgba
    where
        I: PixelSource + ?Sized,
    {
        self.dominant_color(image).unwrap_or(self.config.fallback)
    }

    /// Whole-image average under the configured average mode
    pub fn average_color<I>(&self, image: &I) -> Option<Rgba>
    where
        I: PixelSource + ?Sized,
    {
        self.sampler.average_color(image)
    }

    /// Average of the configured bottom band
    pub fn bottom_color<I>(&self, image: &I) -> Option<Rgba>
    where
        I: PixelSource,
    {
        self.sampler
            .sample_region(image, &self.config.region.bottom_region())
    }

    /// Bottom band average, or the fallback
    ///
    /// The band color is used as sampled; no saturation floor is applied.
    pub fn corrected_bottom_color<I>(&self, image: &I) -> Rgba
    where
        I: PixelSource,
    {
        self.bottom_color(image).unwrap_or(self.config.fallback)
    }

    /// Classify `color` against the configured luminance threshold
    pub fn is_light(&self, color: &Rgba) -> bool {
        color::is_light(color, self.config.luminance.threshold)
    }

    /// Run the dominant-color pipeline and describe the result
    pub fn analyze<I>(&self, image: &I) -> ThemeReport
    where
        I: PixelSource + ?Sized,
    {
        let samples = self.samples(image);
        let buckets = color::cluster(&samples, self.config.clustering.similarity_threshold);
        let winner: Option<ColorBucket> = color::most_frequent(&buckets);

        let color = winner
            .map(|bucket| self.saturate(bucket.representative()))
            .unwrap_or(self.config.fallback);
        let dominant_share = winner
            .map(|bucket| bucket.count() as f64 / samples.len() as f64)
            .unwrap_or(0.0);

        let threshold = self.config.luminance.threshold;
        ThemeReport {
            color,
            hex: color.to_hex(),
            luminance: color::relative_luminance(&color).unwrap_or(0.0),
            is_light: color::is_light(&color, threshold),
            text_tone: color::text_tone(&color, threshold),
            sample_count: samples.len(),
            cluster_count: buckets.len(),
            dominant_share,
            used_fallback: winner.is_none(),
        }
    }

    fn saturate(&self, color: Rgba) -> Rgba {
        color::with_minimum_saturation(color, self.config.saturation.minimum)
    }
}
