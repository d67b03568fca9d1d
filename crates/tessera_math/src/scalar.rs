#[cfg(feature = "f64")]
use std::f64::consts;
#[cfg(not(feature = "f64"))]
use std::f32::consts;

use crate::number_traits::{partial_max, partial_min, Float, NumericOps};
use crate::Real;

pub const E: Real = consts::E;
pub const PI: Real = consts::PI;
pub const HALF_PI: Real = consts::FRAC_PI_2;
pub const TWO_PI: Real = consts::TAU;

pub fn square<T: NumericOps>(x: T) -> T {
    x * x
}

/// `(1 - x) * a + x * b`; `x` is not clamped.
pub fn lerp<T: NumericOps>(a: T, b: T, x: T) -> T {
    (T::one() - x) * a + x * b
}

pub fn clamp<T: PartialOrd>(x: T, min: T, max: T) -> T {
    partial_max(min, partial_min(x, max))
}

pub fn to_radians<T: Float>(degrees: T) -> T {
    degrees / T::from_f64(180.0) * T::pi()
}

pub fn to_degrees<T: Float>(radians: T) -> T {
    radians / T::pi() * T::from_f64(180.0)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use super::*;

    #[test]
    fn constants() {
        assert_float_absolute_eq!(f64::from(HALF_PI) * 2.0, f64::from(PI), 1e-6);
        assert_float_absolute_eq!(f64::from(TWO_PI), f64::from(PI) * 2.0, 1e-6);
        assert_float_absolute_eq!(f64::from(E), 2.718_281_828, 1e-6);
    }

    #[test]
    fn square_of_negative() {
        assert_eq!(square(-3), 9);
        assert_eq!(square(0.5), 0.25);
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
        assert_eq!(lerp(2.0, 4.0, -1.0), 0.0);
    }

    #[test]
    fn clamp_to_range() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-5, 0, 3), 0);
        assert_eq!(clamp(2, 0, 3), 2);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
    }

    #[test]
    fn angle_conversion() {
        assert_float_absolute_eq!(to_radians(180.0_f64), std::f64::consts::PI, 1e-12);
        assert_float_absolute_eq!(to_degrees(std::f32::consts::FRAC_PI_2), 90.0, 1e-5);
        assert_float_absolute_eq!(to_degrees(to_radians(37.5_f64)), 37.5, 1e-12);
    }
}
