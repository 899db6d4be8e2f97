//! Frequency-based grouping of sampled colors
//!
//! A greedy single pass: each sample joins the first bucket whose
//! representative is within the per-channel threshold, otherwise it opens a
//! new bucket. The result depends on input order, and the similarity
//! relation is not transitive, so buckets are not equivalence classes.

use serde::{Deserialize, Serialize};

use super::Rgba;

/// A group of similar samples, keyed by the first sample that opened it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorBucket {
    representative: Rgba,
    count: usize,
}

impl ColorBucket {
    fn open(representative: Rgba) -> Self {
        Self { representative, count: 1 }
    }

    /// First sample that landed in this bucket
    pub fn representative(&self) -> Rgba {
        self.representative
    }

    /// Number of samples matched, including the representative
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Whether two colors are within `threshold` on each of red, green and blue
///
/// Alpha is not compared.
pub fn is_similar(a: &Rgba, b: &Rgba, threshold: f64) -> bool {
    (a.r - b.r).abs() <= threshold
        && (a.g - b.g).abs() <= threshold
        && (a.b - b.b).abs() <= threshold
}

/// Group colors into buckets, preserving bucket creation order
pub fn cluster(colors: &[Rgba], threshold: f64) -> Vec<ColorBucket> {
    let mut buckets: Vec<ColorBucket> = Vec::new();

    for color in colors {
        match buckets
            .iter_mut()
            .find(|bucket| is_similar(color, &bucket.representative, threshold))
        {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(ColorBucket::open(*color)),
        }
    }

    log::trace!(
        "clustered {} samples into {} buckets (threshold {})",
        colors.len(),
        buckets.len(),
        threshold
    );
    buckets
}

/// Bucket with the highest count; the earliest bucket wins ties
pub fn most_frequent(buckets: &[ColorBucket]) -> Option<ColorBucket> {
    let mut best: Option<ColorBucket> = None;

    for bucket in buckets {
        match best {
            Some(current) if current.count >= bucket.count => {}
            _ => best = Some(*bucket),
        }
    }

    best
}

/// Cluster `colors` and return the most frequent bucket
pub fn dominant_bucket(colors: &[Rgba], threshold: f64) -> Option<ColorBucket> {
    most_frequent(&cluster(colors, threshold))
}

/// Representative of the most frequent bucket, or `None` for no samples
pub fn dominant(colors: &[Rgba], threshold: f64) -> Option<Rgba> {
    dominant_bucket(colors, threshold).map(|bucket| bucket.representative)
}
