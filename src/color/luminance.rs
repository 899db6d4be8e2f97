//! Perceptual relative luminance and light/dark classification

use serde::{Deserialize, Serialize};

use super::Rgba;
use crate::constants::{bt709, srgb, CONTRAST_FLARE};

/// Text tone that reads best on top of a background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTone {
    Light,
    Dark,
}

/// Linearize one sRGB-encoded channel
pub fn linearize(c: f64) -> f64 {
    if c <= srgb::LINEAR_CUTOFF {
        c / srgb::LINEAR_SLOPE
    } else {
        ((c + srgb::GAMMA_OFFSET) / (1.0 + srgb::GAMMA_OFFSET)).powf(srgb::GAMMA_EXPONENT)
    }
}

/// BT.709 relative luminance in [0, 1], or `None` for unreadable colors
///
/// Alpha does not participate.
pub fn relative_luminance(color: &Rgba) -> Option<f64> {
    let (r, g, b, _) = color.srgb_components()?;
    Some(
        bt709::RED_WEIGHT * linearize(r)
            + bt709::GREEN_WEIGHT * linearize(g)
            + bt709::BLUE_WEIGHT * linearize(b),
    )
}

/// Whether the luminance strictly exceeds `threshold`
///
/// Unreadable colors are never light.
pub fn is_light(color: &Rgba, threshold: f64) -> bool {
    relative_luminance(color).is_some_and(|luminance| luminance > threshold)
}

/// WCAG contrast ratio between two colors, from 1.0 up to 21.0
pub fn contrast_ratio(a: &Rgba, b: &Rgba) -> Option<f64> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Some((lighter + CONTRAST_FLARE) / (darker + CONTRAST_FLARE))
}

/// Text tone for a background classified against `threshold`
pub fn text_tone(background: &Rgba, threshold: f64) -> TextTone {
    if is_light(background, threshold) {
        TextTone::Dark
    } else {
        TextTone::Light
    }
}
