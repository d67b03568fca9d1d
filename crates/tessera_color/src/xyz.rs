//! CIE 1931 XYZ for the 2 degree standard observer.
//!
//! The color matching functions are the multi-lobe piecewise Gaussian fits of
//! Wyman, Sloan and Shirley, "Simple Analytic Approximations to the CIE XYZ
//! Color Matching Functions" (2013).

use tessera_math::scalar::lerp;
use tessera_math::vector::{Vector2r, Vector3r};
use tessera_math::Real;

use crate::{
    black_body_radiation, VISIBLE_LIGHT_MAX_WAVELENGTH, VISIBLE_LIGHT_MIN_WAVELENGTH,
    VISIBLE_LIGHT_WAVELENGTH_RANGE_LENGTH,
};

/// Gaussian lobe with a different spread on each side of `center`.
fn lobe(wavelength: Real, center: Real, below: Real, above: Real) -> Real {
    let t = (wavelength - center) * if wavelength < center { below } else { above };
    (-0.5 * t * t).exp()
}

#[must_use]
pub fn x_bar_fit(wavelength: Real) -> Real {
    0.362 * lobe(wavelength, 442.0, 0.0624, 0.0374) + 1.056 * lobe(wavelength, 599.8, 0.0264, 0.0323)
        - 0.065 * lobe(wavelength, 501.1, 0.0490, 0.0382)
}

#[must_use]
pub fn y_bar_fit(wavelength: Real) -> Real {
    0.821 * lobe(wavelength, 568.8, 0.0213, 0.0247) + 0.286 * lobe(wavelength, 530.9, 0.0613, 0.0322)
}

#[must_use]
pub fn z_bar_fit(wavelength: Real) -> Real {
    1.217 * lobe(wavelength, 437.0, 0.0845, 0.0278) + 0.681 * lobe(wavelength, 459.0, 0.0385, 0.0725)
}

/// Luminous efficiency of photopic vision, which is the `y` matching function.
#[must_use]
pub fn photometric_curve_fit(wavelength: Real) -> Real {
    y_bar_fit(wavelength)
}

pub fn from_single_wavelength(power: Real, wavelength: Real) -> Vector3r {
    power * Vector3r::new(x_bar_fit(wavelength), y_bar_fit(wavelength), z_bar_fit(wavelength))
}

/// Integrates the black body spectrum over the visible range with `num_steps`
/// evenly spaced samples. Zero steps gives black and a single step samples
/// the shortest visible wavelength only.
#[allow(clippy::cast_precision_loss)]
pub fn from_black_body_temperature(temperature: Real, num_steps: usize) -> Vector3r {
    if num_steps == 0 {
        return Vector3r::default();
    }

    let step_width = VISIBLE_LIGHT_WAVELENGTH_RANGE_LENGTH / num_steps as Real;
    let last_step = (num_steps - 1).max(1) as Real;

    (0..num_steps).fold(Vector3r::default(), |xyz, step| {
        let wavelength = lerp(
            VISIBLE_LIGHT_MIN_WAVELENGTH,
            VISIBLE_LIGHT_MAX_WAVELENGTH,
            step as Real / last_step,
        );
        let power = black_body_radiation(temperature, wavelength);
        xyz + from_single_wavelength(power, wavelength) * step_width
    })
}

/// Number of samples [`from_black_body_temperature`] is usually called with.
pub const DEFAULT_BLACK_BODY_STEPS: usize = 100;

/// XYZ from chromaticity `xy` and luminance `Y`.
#[allow(non_snake_case)]
pub fn from_xy_y(xy: Vector2r, Y: Real) -> Vector3r {
    let scale = Y / xy.y;
    Vector3r::new(scale * xy.x, Y, scale * (1.0 - xy.x - xy.y))
}

/// Chromaticity coordinates of `xyz`.
pub fn to_xy(xyz: Vector3r) -> Vector2r {
    let sum = xyz.x + xyz.y + xyz.z;
    Vector2r::new(xyz.x / sum, xyz.y / sum)
}

/// Chromaticity coordinates of `xyz` including the redundant `z = 1 - x - y`.
pub fn to_xyz(xyz: Vector3r) -> Vector3r {
    let xy = to_xy(xyz);
    Vector3r::new(xy.x, xy.y, 1.0 - xy.x - xy.y)
}
