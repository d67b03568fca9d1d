#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

//! Color science on top of `tessera_math`: blackbody emission, CIE 1931 XYZ,
//! sRGB, an ACES filmic tone map and HSV.
//!
//! Every color is a [`Vector3r`] and every wavelength is in nanometers.

use tessera_math::matrix::Matrix3;
use tessera_math::vector::Vector3r;
use tessera_math::Real;

pub mod aces;
pub mod hsv;
pub mod srgb;
pub mod xyz;

pub const VISIBLE_LIGHT_MIN_WAVELENGTH: Real = 380.0;
pub const VISIBLE_LIGHT_MAX_WAVELENGTH: Real = 780.0;
pub const VISIBLE_LIGHT_WAVELENGTH_RANGE_LENGTH: Real =
    VISIBLE_LIGHT_MAX_WAVELENGTH - VISIBLE_LIGHT_MIN_WAVELENGTH;
/// One sample per whole nanometer, both ends included.
pub const VISIBLE_LIGHT_WAVELENGTH_RANGE_STEPS: usize = 401;

pub mod standard_illuminant {
    use tessera_math::Real;

    pub const D65: Real = 6504.0;
}

/// Typical correlated color temperatures, in kelvin.
pub mod color_temperature {
    use tessera_math::Real;

    pub const CANDLE: Real = 1850.0;
    pub const INCANDESCENT_BULB: Real = 2400.0;
    pub const STUDIO_LIGHT: Real = 3200.0;
    pub const FLUORESCENT_BULB: Real = 5000.0;
}

/// Linear sRGB to XYZ, D65 white point.
pub const XYZ_FROM_SRGB: Matrix3<Real> = Matrix3::from_cols(
    Vector3r::new(0.4123865632529917, 0.21263682167732384, 0.019330620152483987),
    Vector3r::new(0.35759149092062537, 0.7151829818412507, 0.11919716364020845),
    Vector3r::new(0.18045049120356368, 0.07218019648142547, 0.9503725870054354),
);

/// XYZ to linear sRGB, D65 white point.
pub const SRGB_FROM_XYZ: Matrix3<Real> = Matrix3::from_cols(
    Vector3r::new(3.2410032329763587, -0.9692242522025166, 0.055639419851975444),
    Vector3r::new(-1.5373989694887855, 1.875929983695176, -0.20401120612390997),
    Vector3r::new(-0.4986158819963629, 0.041554226340084724, 1.0571489771875335),
);

/// Spectral radiance of a black body at `temperature` kelvin, from Planck's
/// law with rounded physical constants.
#[must_use]
pub fn black_body_radiation(temperature: Real, wavelength_in_nanometer: Real) -> Real {
    let h: Real = 6.6e-34;
    let kb: Real = 1.4e-23;
    let c: Real = 3e8;

    let w = wavelength_in_nanometer / 1e9;
    let w5 = w * w * w * w * w;
    2.0 * h * (c * c) / (w5 * (((h * c) / (w * kb * temperature)).exp() - 1.0))
}
