//! Stephen Hill's fitted approximation of the ACES reference rendering
//! transform followed by the sRGB output transform.

use tessera_math::matrix::Matrix3;
use tessera_math::vector::Vector3r;
use tessera_math::Real;

/// sRGB to XYZ, D65 to D60, AP1 and the RRT saturation step combined.
pub const INPUT_MATRIX: Matrix3<Real> = Matrix3::from_cols(
    Vector3r::new(0.59719, 0.07600, 0.02840),
    Vector3r::new(0.35458, 0.90834, 0.13383),
    Vector3r::new(0.04823, 0.01566, 0.83777),
);

/// ODT saturation, XYZ, D60 to D65 and sRGB combined.
pub const OUTPUT_MATRIX: Matrix3<Real> = Matrix3::from_cols(
    Vector3r::new(1.60475, -0.10208, -0.00327),
    Vector3r::new(-0.53108, 1.10813, -0.07276),
    Vector3r::new(-0.07367, -0.00605, 1.07602),
);

pub fn rrt_and_odt_fit(v: Vector3r) -> Vector3r {
    let a = v * (v + 0.024_578_6) - 0.000_090_537;
    let b = v * (v * 0.983_729 + 0.432_951) + 0.238_081;
    a / b
}

/// Maps scene-referred linear sRGB to display-referred linear sRGB in
/// `[0, 1]`.
pub fn reference_tone_map(color: Vector3r) -> Vector3r {
    let fitted = rrt_and_odt_fit(INPUT_MATRIX * color);
    (OUTPUT_MATRIX * fitted).clamp(Vector3r::splat(0.0), Vector3r::splat(1.0))
}
