use std::fmt::{Display, Formatter};
use std::ops::{Mul, MulAssign};

use crate::matrix::Matrix4;
use crate::number_traits::Float;
use crate::vector::{Vector3, Vector4};
use crate::Real;

pub type Quaternionf = Quaternion<f32>;
pub type Quaterniond = Quaternion<f64>;

/// A quaternion `w + xi + yj + zk` split into its vector and scalar parts.
///
/// Only unit quaternions represent rotations. Nothing here renormalizes, so
/// callers composing many rotations should call [`Quaternion::normalize`]
/// when drift matters.
#[must_use]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T = Real> {
    pub vector_part: Vector3<T>,
    pub scalar_part: T,
}

impl<T> Quaternion<T>
where
    T: Float,
{
    pub fn new(vector_part: Vector3<T>, scalar_part: T) -> Self {
        Self {
            vector_part,
            scalar_part,
        }
    }

    pub fn identity() -> Self {
        Self::new(Vector3::default(), T::one())
    }

    /// Rotation of `angle` radians around `axis`, which must already be
    /// normalized.
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let half_angle = angle.half();
        Self::new(*axis * half_angle.sin(), half_angle.cos())
    }

    pub fn conjugate(&self) -> Self {
        Self::new(-self.vector_part, self.scalar_part)
    }

    /// Same as `self * v`.
    pub fn rotate_vector(&self, v: &Vector3<T>) -> Vector3<T> {
        *self * *v
    }

    #[rustfmt::skip]
    #[allow(clippy::many_single_char_names)]
    pub fn rotation_matrix(&self) -> Matrix4<T> {
        let a = self.scalar_part;
        let b = self.vector_part.x;
        let c = self.vector_part.y;
        let d = self.vector_part.z;
        let a2 = a.squared();
        let b2 = b.squared();
        let c2 = c.squared();
        let d2 = d.squared();
        let two = T::two();

        Matrix4::from_cols(
            Vector4::new(a2 + b2 - c2 - d2, two * (b * c + a * d), two * (b * d - a * c), T::zero()),
            Vector4::new(two * (b * c - a * d), a2 - b2 + c2 - d2, two * (c * d + a * b), T::zero()),
            Vector4::new(two * (b * d + a * c), two * (c * d - a * b), a2 - b2 - c2 + d2, T::zero()),
            Vector4::new(T::zero(), T::zero(), T::zero(), T::one()),
        )
    }

    pub fn normalize(&mut self) {
        let norm = self.norm();
        self.vector_part /= norm;
        self.scalar_part /= norm;
    }

    pub fn normalized(&self) -> Self {
        let mut normalized_quaternion = *self;
        normalized_quaternion.normalize();
        normalized_quaternion
    }

    pub fn norm(&self) -> T {
        (self.vector_part.length2() + self.scalar_part.squared()).sqrt()
    }
}

impl<T> Default for Quaternion<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Display for Quaternion<T>
where
    T: Float,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({} + {} i + {} j + {} k)",
            self.scalar_part, self.vector_part.x, self.vector_part.y, self.vector_part.z
        )
    }
}

impl<T> From<Matrix4<T>> for Quaternion<T>
where
    T: Float,
{
    /// Extracts the rotation from the upper 3x3 block, branching on the
    /// largest diagonal term so the final division never approaches zero.
    fn from(m: Matrix4<T>) -> Self {
        let m00 = m.x.x;
        let m11 = m.y.y;
        let m22 = m.z.z;
        let one = T::one();

        let (t, vector_part, scalar_part) = if m22 < T::zero() {
            if m00 > m11 {
                let t = one + m00 - m11 - m22;
                (t, Vector3::new(t, m.x.y + m.y.x, m.z.x + m.x.z), m.y.z - m.z.y)
            } else {
                let t = one - m00 + m11 - m22;
                (t, Vector3::new(m.x.y + m.y.x, t, m.y.z + m.z.y), m.z.x - m.x.z)
            }
        } else if m00 < -m11 {
            let t = one - m00 - m11 + m22;
            (t, Vector3::new(m.z.x + m.x.z, m.y.z + m.z.y, t), m.x.y - m.y.x)
        } else {
            let t = one + m00 + m11 + m22;
            (t, Vector3::new(m.y.z - m.z.y, m.z.x - m.x.z, m.x.y - m.y.x), t)
        };

        let scale = T::from_f64(0.5) / t.sqrt();
        Quaternion::new(vector_part * scale, scalar_part * scale)
    }
}

impl<T> Mul for Quaternion<T>
where
    T: Float,
{
    type Output = Self;

    /// Hamilton product: applies `rhs` first, then `self`.
    fn mul(self, rhs: Self) -> Self::Output {
        let p = self;
        let q = rhs;

        Quaternion::new(
            q.vector_part * p.scalar_part
                + p.vector_part * q.scalar_part
                + p.vector_part.cross(&q.vector_part),
            p.scalar_part * q.scalar_part - p.vector_part.dot(&q.vector_part),
        )
    }
}

impl<T> MulAssign for Quaternion<T>
where
    T: Float,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T> Mul<Vector3<T>> for Quaternion<T>
where
    T: Float,
{
    type Output = Vector3<T>;

    fn mul(self, v: Vector3<T>) -> Self::Output {
        // Equivalent to q * (v, 0) * conjugate(q) without the full products.
        let t = self.vector_part.cross(&v) * T::two();
        v + t * self.scalar_part + self.vector_part.cross(&t)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use assert_float_eq::*;

    use crate::matrix::Matrix4f;
    use crate::scalar::HALF_PI;
    use crate::vector::{Vector3f, GLOBAL_FORWARD, GLOBAL_RIGHT, GLOBAL_UP};
    use crate::Real;

    use super::*;

    fn assert_quaternion_eq(actual: &Quaternionf, expected: &Quaternionf, epsilon: f32) {
        assert_float_absolute_eq!(actual.scalar_part, expected.scalar_part, epsilon);
        assert_float_absolute_eq!(actual.vector_part.x, expected.vector_part.x, epsilon);
        assert_float_absolute_eq!(actual.vector_part.y, expected.vector_part.y, epsilon);
        assert_float_absolute_eq!(actual.vector_part.z, expected.vector_part.z, epsilon);
    }

    #[test]
    fn mul() {
        let q1 = Quaternion::new(Vector3::new(1.1, 2.0, 4.4), 12.4);
        let q2 = Quaternion::new(Vector3::new(0.3, 45.0, 5.0), 4.0);

        let result = q1 * q2;

        assert_float_absolute_eq!(result.scalar_part, -62.73, 0.01);
        assert_float_absolute_eq!(result.vector_part.x, -179.88, 0.01);
        assert_float_absolute_eq!(result.vector_part.y, 561.82, 0.01);
        assert_float_absolute_eq!(result.vector_part.z, 128.5, 0.01);
    }

    #[test]
    fn mul_is_not_commutative() {
        let a = Quaternionf::from_axis_angle(&Vector3f::new(1.0, 0.0, 0.0), 0.5);
        let b = Quaternionf::from_axis_angle(&Vector3f::new(0.0, 1.0, 0.0), 1.2);

        assert_ne!(a * b, b * a);
    }

    #[test]
    fn mul_assign() {
        let a = Quaternionf::from_axis_angle(&Vector3f::new(0.0, 0.0, 1.0), 0.3);
        let b = Quaternionf::from_axis_angle(&Vector3f::new(0.0, 0.0, 1.0), 0.4);
        let mut c = a;

        c *= b;

        assert_quaternion_eq(
            &c,
            &Quaternionf::from_axis_angle(&Vector3f::new(0.0, 0.0, 1.0), 0.7),
            1e-6,
        );
    }

    #[test]
    fn identity() {
        let q = Quaternionf::default();
        let v = Vector3f::new(1.0, -2.0, 3.0);

        assert_eq!(q, Quaternion::new(Vector3::new(0.0, 0.0, 0.0), 1.0));
        assert_eq!(q * v, v);
    }

    #[test]
    fn rotation_matrix() {
        let q = Quaternion::new(Vector3::new(0.77, -0.31, 0.0), 0.56);

        let matrix = q.rotation_matrix();

        assert_float_absolute_eq!(matrix.x.x, 0.80, 0.02);
        assert_float_absolute_eq!(matrix.y.x, -0.47, 0.02);
        assert_float_absolute_eq!(matrix.z.x, -0.34, 0.02);
        assert_float_absolute_eq!(matrix.w.x, 0.0, 0.02);
        assert_float_absolute_eq!(matrix.x.y, -0.47, 0.02);
        assert_float_absolute_eq!(matrix.y.y, -0.18, 0.02);
        assert_float_absolute_eq!(matrix.z.y, -0.86, 0.02);
        assert_float_absolute_eq!(matrix.w.y, 0.0, 0.02);
        assert_float_absolute_eq!(matrix.x.z, 0.34, 0.02);
        assert_float_absolute_eq!(matrix.y.z, 0.86, 0.02);
        assert_float_absolute_eq!(matrix.z.z, -0.37, 0.02);
        assert_float_absolute_eq!(matrix.w.z, 0.0, 0.02);
        assert_eq!(matrix.x.w, 0.0);
        assert_eq!(matrix.y.w, 0.0);
        assert_eq!(matrix.z.w, 0.0);
        assert_eq!(matrix.w.w, 1.0);
    }

    #[test]
    fn norm() {
        let quaternion = Quaternion::new(Vector3::new(12.0, 34.0, 56.0), 23.0);

        let norm = quaternion.norm();

        assert_float_absolute_eq!(norm, 70.46, 0.01);
    }

    #[test]
    fn normalize() {
        let mut quaternion = Quaternion::new(Vector3::new(12.0, 34.0, 56.0), 23.0);

        quaternion.normalize();

        assert_float_absolute_eq!(quaternion.scalar_part, 0.32, 0.01);
        assert_float_absolute_eq!(quaternion.vector_part.x, 0.17, 0.01);
        assert_float_absolute_eq!(quaternion.vector_part.y, 0.48, 0.01);
        assert_float_absolute_eq!(quaternion.vector_part.z, 0.79, 0.01);
    }

    #[test]
    fn normalized() {
        let quaternion = Quaternion::new(Vector3::new(12.0, 34.0, 56.0), 23.0);

        let normalized = quaternion.normalized();

        assert_float_absolute_eq!(normalized.norm(), 1.0, 1e-6);
        assert_float_absolute_eq!(normalized.scalar_part, 0.32, 0.01);
    }

    #[test]
    fn conjugate_undoes_rotation() {
        let q = Quaternionf::from_axis_angle(&Vector3f::new(0.0, 0.6, 0.8), 1.1);
        let v = Vector3f::new(0.3, -1.0, 2.0);

        let back = q.conjugate() * (q * v);

        assert_float_absolute_eq!(back.x, v.x, 1e-5);
        assert_float_absolute_eq!(back.y, v.y, 1e-5);
        assert_float_absolute_eq!(back.z, v.z, 1e-5);
    }

    #[test]
    fn from_axis_angle() {
        let axis = Vector3::new(1.0, 2.0, 3.0).normalized();
        let angle = 0.74;

        let quaternion = Quaternion::from_axis_angle(&axis, angle);

        assert_float_absolute_eq!(quaternion.scalar_part, 0.93, 0.01);
        assert_float_absolute_eq!(quaternion.vector_part.x, 0.09, 0.01);
        assert_float_absolute_eq!(quaternion.vector_part.y, 0.19, 0.01);
        assert_float_absolute_eq!(quaternion.vector_part.z, 0.28, 0.01);
    }

    #[test]
    #[allow(clippy::cast_possible_truncation)]
    fn rotate_vector() {
        let rotation = Quaternion::from_axis_angle(&Vector3f::new(0.0, 1.0, 0.0), PI);
        let rotated_vector = rotation.rotate_vector(&Vector3f::new(1.0, 0.0, 0.0));
        assert_eq!(rotated_vector.x.round() as i32, -1);
        assert_eq!(rotated_vector.y.round() as i32, 0);
        assert_eq!(rotated_vector.z.round() as i32, 0);
    }

    #[test]
    fn quarter_turn_about_up_maps_right_to_forward() {
        let rotated = Quaternion::<Real>::from_axis_angle(&GLOBAL_UP, HALF_PI) * GLOBAL_RIGHT;

        assert_float_absolute_eq!(rotated.x, GLOBAL_FORWARD.x, 1e-6);
        assert_float_absolute_eq!(rotated.y, GLOBAL_FORWARD.y, 1e-6);
        assert_float_absolute_eq!(rotated.z, GLOBAL_FORWARD.z, 1e-6);
    }

    #[test]
    fn rotation_matches_matrix() {
        let q = Quaternionf::from_axis_angle(&Vector3f::new(2.0, -1.0, 0.5).normalized(), 2.3);
        let v = Vector3f::new(-4.0, 0.5, 3.0);

        let by_quaternion = q * v;
        let by_matrix = (q.rotation_matrix() * v.extend(0.0)).xyz();

        assert_float_absolute_eq!(by_quaternion.x, by_matrix.x, 1e-5);
        assert_float_absolute_eq!(by_quaternion.y, by_matrix.y, 1e-5);
        assert_float_absolute_eq!(by_quaternion.z, by_matrix.z, 1e-5);
    }

    #[test]
    fn from_matrix_round_trip_in_every_branch() {
        let rotations = [
            Quaternionf::from_axis_angle(&Vector3f::new(0.0, 0.0, 1.0), 0.4),
            Quaternionf::from_axis_angle(&Vector3f::new(1.0, 0.0, 0.0), 3.0),
            Quaternionf::from_axis_angle(&Vector3f::new(0.0, 1.0, 0.0), 3.0),
            Quaternionf::from_axis_angle(&Vector3f::new(0.0, 0.0, 1.0), 3.0),
        ];

        for q in rotations {
            let recovered = Quaternionf::from(q.rotation_matrix());
            let sign = if recovered.scalar_part * q.scalar_part < 0.0 {
                -1.0
            } else {
                1.0
            };
            let recovered = Quaternion::new(
                recovered.vector_part * sign,
                recovered.scalar_part * sign,
            );

            assert_quaternion_eq(&recovered, &q, 1e-5);
        }
    }

    #[test]
    fn from_identity_matrix() {
        let q = Quaternionf::from(Matrix4f::default());

        assert_quaternion_eq(&q, &Quaternionf::identity(), 1e-7);
    }

    #[test]
    fn display() {
        let q = Quaternionf::identity();

        assert_eq!(format!("{q}"), "(1 + 0 i + 0 j + 0 k)");
    }
}
