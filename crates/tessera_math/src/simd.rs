//! 4-wide `f32` dot products.
//!
//! Both strategies are always compiled. The `simd` feature decides which one
//! [`dot4`] forwards to; the scalar formula is the reference result and the
//! vectorized one may differ from it only by rounding.

use wide::f32x4;

/// Reference dot product: four multiplies summed left to right.
#[inline]
#[must_use]
pub fn dot4_scalar(lhs: [f32; 4], rhs: [f32; 4]) -> f32 {
    lhs[0] * rhs[0] + lhs[1] * rhs[1] + lhs[2] * rhs[2] + lhs[3] * rhs[3]
}

/// Lane-wise multiply followed by a horizontal add.
#[inline]
#[must_use]
pub fn dot4_simd(lhs: [f32; 4], rhs: [f32; 4]) -> f32 {
    (f32x4::from(lhs) * f32x4::from(rhs)).reduce_add()
}

#[inline]
#[must_use]
pub fn dot4(lhs: [f32; 4], rhs: [f32; 4]) -> f32 {
    if cfg!(feature = "simd") {
        dot4_simd(lhs, rhs)
    } else {
        dot4_scalar(lhs, rhs)
    }
}
