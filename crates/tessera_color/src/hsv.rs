//! Hue, saturation and value, packed as `(h, s, v)` with the hue in degrees.

use tessera_math::precondition::{self, PreconditionViolation};
use tessera_math::vector::Vector3r;
use tessera_math::Real;

/// Converts to RGB. Hues outside `[0, 360)` wrap around.
///
/// A hue that lands in no sector (only possible for NaN) is reported as
/// [`PreconditionViolation::InvalidHueSector`]; if the handler returns, the
/// result is black.
pub fn to_rgb(hsv: &Vector3r) -> Vector3r {
    let h = ((hsv.x % 360.0) + 360.0) % 360.0;
    let s = hsv.y;
    let v = hsv.z;

    let c = v * s;
    let h_prim = h / 60.0;
    let x = c * (1.0 - ((h_prim % 2.0) - 1.0).abs());
    let m = v - c;

    if h_prim <= 1.0 {
        Vector3r::new(c + m, x + m, m)
    } else if h_prim <= 2.0 {
        Vector3r::new(x + m, c + m, m)
    } else if h_prim <= 3.0 {
        Vector3r::new(m, c + m, x + m)
    } else if h_prim <= 4.0 {
        Vector3r::new(m, x + m, c + m)
    } else if h_prim <= 5.0 {
        Vector3r::new(x + m, m, c + m)
    } else if h_prim <= 6.0 {
        Vector3r::new(c + m, m, x + m)
    } else {
        precondition::report(PreconditionViolation::InvalidHueSector {
            hue: f64::from(hsv.x),
        });
        Vector3r::splat(0.0)
    }
}

/// Converts from RGB, clamping the input to `[0, 1]` first.
///
/// Colors whose largest channel is red get a hue in `[-60, 60]`.
#[allow(clippy::float_cmp)]
pub fn from_rgb(rgb: &Vector3r) -> Vector3r {
    let rgb = rgb.clamp(Vector3r::splat(0.0), Vector3r::splat(1.0));
    let (r, g, b) = (rgb.x, rgb.y, rgb.z);

    let max = r.max(g.max(b));
    let min = r.min(g.min(b));
    let c = max - min;

    let v = max;
    let s = if v == 0.0 { 0.0 } else { c / v };

    let h: Real = if c == 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / c
    } else if v == g {
        60.0 * (2.0 + (b - r) / c)
    } else {
        60.0 * (4.0 + (r - g) / c)
    };

    Vector3r::new(h, s, v)
}
