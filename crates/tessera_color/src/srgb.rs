use tessera_math::vector::Vector3r;
use tessera_math::Real;

use crate::{xyz, SRGB_FROM_XYZ};

const LUMINANCE_WEIGHTS: Vector3r = Vector3r::new(0.2126, 0.7152, 0.0722);

/// Relative luminance of a linear sRGB color.
#[must_use]
pub fn luminance(color: &Vector3r) -> Real {
    color.dot(&LUMINANCE_WEIGHTS)
}

/// Linear to gamma-encoded sRGB transfer function.
#[must_use]
pub fn gamma_encode(linear: Real) -> Real {
    if linear < 0.003_130_8 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Gamma-encoded to linear sRGB transfer function.
#[must_use]
pub fn gamma_decode(encoded: Real) -> Real {
    if encoded < 0.040_45 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

pub fn gamma_encode_color(linear: Vector3r) -> Vector3r {
    linear.map(gamma_encode)
}

pub fn gamma_decode_color(encoded: Vector3r) -> Vector3r {
    encoded.map(gamma_decode)
}

/// Linear sRGB of a black body, unnormalized. Components outside the gamut
/// come out negative.
pub fn from_black_body_temperature(temperature: Real, num_steps: usize) -> Vector3r {
    SRGB_FROM_XYZ * xyz::from_black_body_temperature(temperature, num_steps)
}
