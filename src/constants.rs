//! Reference constants for color analysis
//!
//! Transfer-function and luminance coefficients come from the sRGB and
//! ITU-R BT.709 standards. Analysis defaults are named here so every
//! caller-facing default is visible in one place.

/// sRGB transfer function parameters
///
/// The linear-segment cutoff follows the WCAG 2.x definition (0.03928)
/// rather than IEC 61966-2-1 (0.04045). The two agree to within 8-bit
/// precision.
pub mod srgb {
    /// Encoded values at or below this use the linear segment
    pub const LINEAR_CUTOFF: f64 = 0.03928;

    /// Divisor of the linear segment
    pub const LINEAR_SLOPE: f64 = 12.92;

    /// Offset of the power segment
    pub const GAMMA_OFFSET: f64 = 0.055;

    /// Exponent of the power segment
    pub const GAMMA_EXPONENT: f64 = 2.4;
}

/// ITU-R BT.709 relative luminance weights for linear R, G, B
pub mod bt709 {
    pub const RED_WEIGHT: f64 = 0.2126;
    pub const GREEN_WEIGHT: f64 = 0.7152;
    pub const BLUE_WEIGHT: f64 = 0.0722;
}

/// Defaults used by [`crate::AnalysisConfig`]
///
/// The dominant-color grid has no default here: it is always chosen by the
/// caller.
pub mod defaults {
    /// Per-channel tolerance for two samples to share a bucket
    pub const SIMILARITY_THRESHOLD: f64 = 0.1;

    /// Saturation floor applied to the dominant color
    pub const MIN_SATURATION: f64 = 0.15;

    /// Height in pixels of the band used for bottom-color sampling
    pub const BOTTOM_CROP_HEIGHT: u32 = 100;

    /// Luminance above which a color counts as light
    pub const LUMINANCE_THRESHOLD: f64 = 0.70;
}

/// WCAG contrast offset added to both luminances
pub const CONTRAST_FLARE: f64 = 0.05;
