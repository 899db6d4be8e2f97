//! Color value and analysis module
//!
//! This module holds the normalized color type and the per-color
//! operations: similarity clustering, saturation adjustment and luminance
//! classification.

pub mod rgba;
pub mod cluster;
pub mod saturation;
pub mod luminance;

pub use rgba::{Hsb, Rgba};
pub use cluster::{cluster, dominant, dominant_bucket, is_similar, most_frequent, ColorBucket};
pub use saturation::with_minimum_saturation;
pub use luminance::{contrast_ratio, is_light, relative_luminance, text_tone, TextTone};
