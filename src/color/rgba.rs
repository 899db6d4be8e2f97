//! Normalized RGBA color value and its HSB representation
//!
//! Provides:
//! - Validated construction from floating components or RGBA8 bytes
//! - Hexadecimal formatting and parsing
//! - A single hue/saturation/brightness conversion built on `palette::Hsv`

use palette::{encoding, FromColor, Hsv, Srgb};
use serde::{Deserialize, Serialize};

use crate::{AnalysisError, Result};

/// sRGB-encoded color with straight (non-premultiplied) alpha
///
/// Every component is expected in [0, 1]. [`Rgba::new`] enforces this;
/// values built field by field are checked lazily by
/// [`Rgba::srgb_components`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Hue, saturation, brightness and alpha, all in [0, 1]
///
/// Hue is a fraction of a full turn, so 0.5 is cyan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

impl Rgba {
    /// Fully transparent black, the neutral fallback color
    pub const TRANSPARENT: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
    pub const BLACK: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Create a color from normalized components
    ///
    /// # Errors
    ///
    /// Returns `InvalidComponent` for the first component that is not a
    /// finite value in [0, 1].
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self> {
        for (channel, value) in [('r', r), ('g', g), ('b', b), ('a', a)] {
            if !is_normalized(value) {
                return Err(AnalysisError::InvalidComponent { channel, value });
            }
        }
        Ok(Self { r, g, b, a })
    }

    /// Opaque color from normalized components
    pub fn opaque(r: f64, g: f64, b: f64) -> Result<Self> {
        Self::new(r, g, b, 1.0)
    }

    /// Convert one RGBA8 pixel
    pub fn from_rgba8(pixel: [u8; 4]) -> Self {
        Self {
            r: pixel[0] as f64 / 255.0,
            g: pixel[1] as f64 / 255.0,
            b: pixel[2] as f64 / 255.0,
            a: pixel[3] as f64 / 255.0,
        }
    }

    /// Quantize to RGBA8, rounding to the nearest step
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// sRGB components, or `None` when the color is not readable
    ///
    /// A color is unreadable when any component is NaN, infinite or outside
    /// [0, 1]. Consumers treat that as "no value" rather than clamping.
    pub fn srgb_components(&self) -> Option<(f64, f64, f64, f64)> {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| is_normalized(*c))
            .then_some((self.r, self.g, self.b, self.a))
    }

    /// Hue/saturation/brightness representation
    ///
    /// Achromatic colors report hue 0.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedColorSpace` when a component is non-finite or
    /// outside [0, 1].
    pub fn to_hsb(&self) -> Result<Hsb> {
        let (r, g, b, a) = self
            .srgb_components()
            .ok_or_else(|| AnalysisError::UnsupportedColorSpace {
                message: format!("{:?} is not an sRGB color", self),
            })?;
        let hsv = Hsv::<encoding::Srgb, f64>::from_color(Srgb::new(r, g, b));

        Ok(Hsb {
            hue: (hsv.hue.into_positive_degrees() / 360.0).rem_euclid(1.0),
            saturation: hsv.saturation,
            brightness: hsv.value,
            alpha: a,
        })
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional)
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the string has the wrong length or
    /// contains non-hex digits.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(AnalysisError::invalid_parameter("hex color", hex));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| AnalysisError::invalid_parameter("hex color", hex))
        };

        let alpha = if digits.len() == 8 { channel(6..8)? } else { u8::MAX };
        Ok(Self::from_rgba8([channel(0..2)?, channel(2..4)?, channel(4..6)?, alpha]))
    }
}

impl Hsb {
    /// Create an HSB color, rejecting components outside [0, 1]
    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Result<Self> {
        for (channel, value) in [('h', hue), ('s', saturation), ('v', brightness), ('a', alpha)] {
            if !is_normalized(value) {
                return Err(AnalysisError::InvalidComponent { channel, value });
            }
        }
        Ok(Self { hue, saturation, brightness, alpha })
    }

    /// Convert back to RGBA
    pub fn to_rgba(&self) -> Rgba {
        let hsv = Hsv::<encoding::Srgb, f64>::new(self.hue * 360.0, self.saturation, self.brightness);
        let rgb = Srgb::<f64>::from_color(hsv);

        // Conversion noise can land a hair outside the unit range
        Rgba {
            r: rgb.red.clamp(0.0, 1.0),
            g: rgb.green.clamp(0.0, 1.0),
            b: rgb.blue.clamp(0.0, 1.0),
            a: self.alpha,
        }
    }
}

fn is_normalized(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

fn quantize(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Rgba::new(0.2, 0.4, 0.6, 1.0).is_ok());

        match Rgba::new(0.2, 1.2, 0.6, 1.0) {
            Err(AnalysisError::InvalidComponent { channel, value }) => {
                assert_eq!(channel, 'g');
                assert_eq!(value, 1.2);
            }
            other => panic!("Expected InvalidComponent, got {:?}", other),
        }

        assert!(Rgba::new(f64::NAN, 0.0, 0.0, 1.0).is_err());
        assert!(Rgba::new(0.0, 0.0, 0.0, -0.1).is_err());
    }

    #[test]
    fn test_rgba8_conversion() {
        let color = Rgba::from_rgba8([255, 0, 51, 255]);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.2).abs() < EPS);
        assert_eq!(color.to_rgba8(), [255, 0, 51, 255]);
    }

    #[test]
    fn test_srgb_components_unreadable() {
        let broken = Rgba { r: 0.5, g: f64::INFINITY, b: 0.5, a: 1.0 };
        assert!(broken.srgb_components().is_none());
        assert!(matches!(
            broken.to_hsb(),
            Err(AnalysisError::UnsupportedColorSpace { .. })
        ));

        let fine = Rgba::opaque(0.1, 0.2, 0.3).unwrap();
        assert_eq!(fine.srgb_components(), Some((0.1, 0.2, 0.3, 1.0)));
    }

    #[test]
    fn test_to_hsb_primaries() {
        let red = Rgba::opaque(1.0, 0.0, 0.0).unwrap().to_hsb().unwrap();
        assert!(red.hue.abs() < EPS);
        assert!((red.saturation - 1.0).abs() < EPS);
        assert!((red.brightness - 1.0).abs() < EPS);

        let blue = Rgba::opaque(0.0, 0.0, 1.0).unwrap().to_hsb().unwrap();
        assert!((blue.hue - 2.0 / 3.0).abs() < 1e-6);

        let gray = Rgba::opaque(0.5, 0.5, 0.5).unwrap().to_hsb().unwrap();
        assert!(gray.saturation.abs() < EPS);
        assert!((gray.brightness - 0.5).abs() < EPS);
    }

    #[test]
    fn test_hsb_roundtrip_preserves_alpha() {
        let color = Rgba::new(0.8, 0.4, 0.2, 0.5).unwrap();
        let back = color.to_hsb().unwrap().to_rgba();
        assert!((back.r - 0.8).abs() < 1e-6);
        assert!((back.g - 0.4).abs() < 1e-6);
        assert!((back.b - 0.2).abs() < 1e-6);
        assert_eq!(back.a, 0.5);
    }

    #[test]
    fn test_hsb_new_validation() {
        assert!(Hsb::new(0.5, 0.05, 0.8, 1.0).is_ok());
        assert!(Hsb::new(1.5, 0.05, 0.8, 1.0).is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgba::opaque(1.0, 0.0, 0.0).unwrap().to_hex(), "#FF0000");
        assert_eq!(Rgba::WHITE.to_hex(), "#FFFFFF");
        assert_eq!(Rgba::TRANSPARENT.to_hex(), "#00000000");
    }

    #[test]
    fn test_from_hex() {
        let green = Rgba::from_hex("00FF00").unwrap();
        assert_eq!(green.to_rgba8(), [0, 255, 0, 255]);

        let translucent = Rgba::from_hex("#3366CC80").unwrap();
        assert_eq!(translucent.to_rgba8(), [0x33, 0x66, 0xCC, 0x80]);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Rgba::from_hex("#FF").is_err());
        assert!(Rgba::from_hex("#GGGGGG").is_err());
        assert!(Rgba::from_hex("#ÿÿÿ").is_err());
    }
}
