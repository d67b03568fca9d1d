#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

#[cfg(test)]
extern crate assert_float_eq;

pub mod aabb;
pub mod matrix;
pub mod number_traits;
pub mod precondition;
pub mod quaternion;
pub mod scalar;
pub mod simd;
pub mod transform;
pub mod vector;

/// Element type of the un-suffixed aliases (`Vector3r`, `Aabb3`, ...) and
/// the default type parameter of every generic type in this crate.
#[cfg(not(feature = "f64"))]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

pub use aabb::{Aabb3, AxisAlignedBoundingBox3};
pub use matrix::{Identity, Matrix3, Matrix4};
pub use precondition::{FailureHandler, PreconditionViolation};
pub use quaternion::Quaternion;
pub use transform::OrthographicDepthMode;
pub use vector::{Vector2, Vector3, Vector4};
