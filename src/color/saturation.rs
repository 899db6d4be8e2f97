//! Saturation floor for theme colors

use super::Rgba;

/// Raise saturation to at least `minimum`, keeping hue, brightness and alpha
///
/// Colors that cannot be converted to HSB are returned unchanged. A
/// `minimum` outside [0, 1] is clamped into range; NaN is treated as 0.
pub fn with_minimum_saturation(color: Rgba, minimum: f64) -> Rgba {
    let mut hsb = match color.to_hsb() {
        Ok(hsb) => hsb,
        Err(e) => {
            log::debug!("leaving color unchanged: {}", e);
            return color;
        }
    };

    let floor = if minimum.is_nan() { 0.0 } else { minimum.clamp(0.0, 1.0) };
    if hsb.saturation >= floor {
        return color;
    }

    hsb.saturation = floor;
    hsb.to_rgba()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsb;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_raises_low_saturation() {
        let dull = Hsb::new(0.5, 0.05, 0.8, 1.0).unwrap().to_rgba();
        let adjusted = with_minimum_saturation(dull, 0.15).to_hsb().unwrap();

        assert!((adjusted.saturation - 0.15).abs() < TOLERANCE);
        assert!((adjusted.hue - 0.5).abs() < TOLERANCE);
        assert!((adjusted.brightness - 0.8).abs() < TOLERANCE);
        assert_eq!(adjusted.alpha, 1.0);
    }

    #[test]
    fn test_already_saturated_is_noop() {
        let vivid = Hsb::new(0.25, 0.30, 0.6, 1.0).unwrap().to_rgba();
        assert_eq!(with_minimum_saturation(vivid, 0.15), vivid);
    }

    #[test]
    fn test_idempotent() {
        let dull = Hsb::new(0.1, 0.02, 0.7, 1.0).unwrap().to_rgba();
        let once = with_minimum_saturation(dull, 0.15);
        let twice = with_minimum_saturation(once, 0.15);

        let a = once.to_hsb().unwrap();
        let b = twice.to_hsb().unwrap();
        assert!((a.saturation - b.saturation).abs() < TOLERANCE);
        assert!((a.hue - b.hue).abs() < TOLERANCE);
    }

    #[test]
    fn test_preserves_alpha() {
        let translucent = Rgba::new(0.5, 0.5, 0.5, 0.25).unwrap();
        assert_eq!(with_minimum_saturation(translucent, 0.15).a, 0.25);
    }

    #[test]
    fn test_black_stays_black() {
        let black = with_minimum_saturation(Rgba::BLACK, 0.15);
        assert_eq!(black.to_rgba8(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_floor_is_clamped() {
        let dull = Hsb::new(0.6, 0.1, 0.5, 1.0).unwrap().to_rgba();

        let full = with_minimum_saturation(dull, 3.0).to_hsb().unwrap();
        assert!((full.saturation - 1.0).abs() < TOLERANCE);

        assert_eq!(with_minimum_saturation(dull, -1.0), dull);
        assert_eq!(with_minimum_saturation(dull, f64::NAN), dull);
    }

    #[test]
    fn test_unreadable_color_returned_unchanged() {
        let broken = Rgba { r: f64::NAN, g: 0.2, b: 0.2, a: 1.0 };
        let result = with_minimum_saturation(broken, 0.15);
        assert!(result.r.is_nan());
        assert_eq!(result.g, 0.2);
    }
}
