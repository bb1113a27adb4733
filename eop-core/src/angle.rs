//! Angle normalization for rotation angles.
//!
//! Earth Rotation Angle and sidereal time are conventionally non-negative,
//! with the discontinuity at 0h/24h, so the engine normalizes them to
//! [0, 2pi). `fmod` is used rather than the `%` operator because Rust's `%`
//! keeps the sign of the dividend; the negative branch is adjusted after.

use crate::constants::TWOPI;
use crate::math::fmod;

/// Wraps an angle to [0, 2pi) radians.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;

    #[test]
    fn test_in_range_unchanged() {
        assert_eq!(wrap_0_2pi(1.0), 1.0);
        assert_eq!(wrap_0_2pi(0.0), 0.0);
    }

    #[test]
    fn test_negative_wraps_positive() {
        assert!((wrap_0_2pi(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_overflow_reduced() {
        assert!((wrap_0_2pi(3.0 * PI) - PI).abs() < 1e-15);
        assert!(wrap_0_2pi(TWOPI).abs() < 1e-15);
    }
}
