//! Builders for affine transforms and projection matrices.
//!
//! All projections are right-handed: the camera looks down `-Z` in view
//! space, which is the space [`Matrix4::new_look_at`] maps into.

use crate::matrix::{Identity, Matrix4};
use crate::number_traits::Float;
use crate::precondition::{self, PreconditionViolation};
use crate::quaternion::Quaternion;
use crate::vector::{Vector3, Vector4};

/// Depth range of clip space after the perspective divide.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrthographicDepthMode {
    ZeroToOne,
    NegativeOneToOne,
}

fn check_depth_range<T: Float>(near: T, far: T) {
    if (far - near).abs() <= T::epsilon() {
        precondition::report(PreconditionViolation::DegenerateDepthRange {
            near: near.to_f64(),
            far: far.to_f64(),
        });
    }
}

fn check_perspective<T: Float>(fov_y: T, aspect_ratio: T, near: T, far: T) {
    if aspect_ratio <= T::epsilon() {
        precondition::report(PreconditionViolation::InvalidAspectRatio {
            aspect_ratio: aspect_ratio.to_f64(),
        });
    }
    check_depth_range(near, far);
    if fov_y <= T::epsilon() {
        precondition::report(PreconditionViolation::InvalidFieldOfView {
            fov_y: fov_y.to_f64(),
        });
    }
}

impl<T> Matrix4<T>
where
    T: Float,
{
    pub fn new_scale_uniform(scale: T) -> Self {
        Self::new_scale(&Vector3::splat(scale))
    }

    #[rustfmt::skip]
    pub fn new_scale(scale: &Vector3<T>) -> Self {
        let zero = T::zero();
        Self::from_cols(
            Vector4::new(scale.x, zero, zero, zero),
            Vector4::new(zero, scale.y, zero, zero),
            Vector4::new(zero, zero, scale.z, zero),
            Vector4::new(zero, zero, zero, T::one()),
        )
    }

    pub fn new_translation(translation: &Vector3<T>) -> Self {
        let mut m = Self::identity();
        m.w = translation.extend(T::one());
        m
    }

    pub fn new_rotation(rotation: &Quaternion<T>) -> Self {
        rotation.rotation_matrix()
    }

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// `up` only needs to be roughly up; it must not be parallel to the view
    /// direction.
    #[rustfmt::skip]
    pub fn new_look_at(eye: Vector3<T>, target: Vector3<T>, up: Vector3<T>) -> Self {
        let forward = (target - eye).normalized();
        let right = forward.cross(&up).normalized();
        let up = right.cross(&forward);

        let zero = T::zero();
        Self::from_cols(
            Vector4::new(right.x, up.x, -forward.x, zero),
            Vector4::new(right.y, up.y, -forward.y, zero),
            Vector4::new(right.z, up.z, -forward.z, zero),
            Vector4::new(-right.dot(&eye), -up.dot(&eye), forward.dot(&eye), T::one()),
        )
    }

    /// Perspective projection into Vulkan clip space: depth in `[0, 1]` and
    /// `+Y` pointing down. `fov_y` is in radians.
    #[rustfmt::skip]
    pub fn new_perspective_vulkan(fov_y: T, aspect_ratio: T, near: T, far: T) -> Self {
        check_perspective(fov_y, aspect_ratio, near, far);

        let tan_half_fov_y = fov_y.half().tan();
        let zero = T::zero();
        let one = T::one();
        Self::from_cols(
            Vector4::new(one / (aspect_ratio * tan_half_fov_y), zero, zero, zero),
            Vector4::new(zero, -one / tan_half_fov_y, zero, zero),
            Vector4::new(zero, zero, far / (near - far), -one),
            Vector4::new(zero, zero, -(far * near) / (far - near), zero),
        )
    }

    /// Perspective projection into OpenGL clip space: depth in `[-1, 1]`.
    /// `fov_y` is in radians.
    #[rustfmt::skip]
    pub fn new_perspective_opengl(fov_y: T, aspect_ratio: T, near: T, far: T) -> Self {
        check_perspective(fov_y, aspect_ratio, near, far);

        let tan_half_fov_y = fov_y.half().tan();
        let zero = T::zero();
        let one = T::one();
        Self::from_cols(
            Vector4::new(one / (aspect_ratio * tan_half_fov_y), zero, zero, zero),
            Vector4::new(zero, one / tan_half_fov_y, zero, zero),
            Vector4::new(zero, zero, -(far + near) / (far - near), -one),
            Vector4::new(zero, zero, -(T::two() * far * near) / (far - near), zero),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_orthographic(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
        depth_mode: OrthographicDepthMode,
    ) -> Self {
        check_depth_range(near, far);

        let two = T::two();
        let mut m = Self::identity();
        m.x.x = two / (right - left);
        m.y.y = two / (top - bottom);
        m.w.x = -(right + left) / (right - left);
        m.w.y = -(top + bottom) / (top - bottom);

        match depth_mode {
            OrthographicDepthMode::ZeroToOne => {
                m.z.z = -T::one() / (far - near);
                m.w.z = -near / (far - near);
            }
            OrthographicDepthMode::NegativeOneToOne => {
                m.z.z = -two / (far - near);
                m.w.z = -(far + near) / (far - near);
            }
        }

        m
    }

    /// Square orthographic view of side `size` centered on the view axis,
    /// with Vulkan's downward `+Y` and `[0, 1]` depth.
    pub fn new_orthographic_vulkan(size: T, near: T, far: T) -> Self {
        let half_size = size.half();
        Self::new_orthographic(
            -half_size,
            half_size,
            half_size,
            -half_size,
            near,
            far,
            OrthographicDepthMode::ZeroToOne,
        )
    }

    /// Square orthographic view of side `size` centered on the view axis,
    /// with OpenGL's `[-1, 1]` depth.
    pub fn new_orthographic_opengl(size: T, near: T, far: T) -> Self {
        let half_size = size.half();
        Self::new_orthographic(
            -half_size,
            half_size,
            -half_size,
            half_size,
            near,
            far,
            OrthographicDepthMode::NegativeOneToOne,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use assert_float_eq::*;

    use super::*;
    use crate::matrix::Matrix4f;
    use crate::precondition::with_failure_handler;
    use crate::quaternion::Quaternionf;
    use crate::vector::Vector3f;

    fn project(m: &Matrix4f, point: Vector3f) -> Vector3f {
        let clip = *m * point.extend(1.0);
        clip.xyz() / clip.w
    }

    fn assert_vec3_eq(actual: Vector3f, expected: Vector3f, epsilon: f32) {
        assert_float_absolute_eq!(actual.x, expected.x, epsilon);
        assert_float_absolute_eq!(actual.y, expected.y, epsilon);
        assert_float_absolute_eq!(actual.z, expected.z, epsilon);
    }

    #[test]
    fn new_scale() {
        let m = Matrix4f::new_scale(&Vector3::new(2.0, 3.0, 4.0));

        assert_eq!(m * Vector4::new(1.0, 1.0, 1.0, 1.0), Vector4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(Matrix4f::new_scale_uniform(2.0).w.w, 1.0);
        assert_eq!(Matrix4f::new_scale_uniform(2.0).z.z, 2.0);
    }

    #[test]
    fn new_translation() {
        let m = Matrix4f::new_translation(&Vector3::new(1.0, -2.0, 3.0));

        assert_eq!(m.w, Vector4::new(1.0, -2.0, 3.0, 1.0));
        assert_eq!(m * Vector4::new(1.0, 1.0, 1.0, 1.0), Vector4::new(2.0, -1.0, 4.0, 1.0));
        assert_eq!(m * Vector4::new(1.0, 1.0, 1.0, 0.0), Vector4::new(1.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn new_rotation_matches_quaternion() {
        let q = Quaternionf::from_axis_angle(&Vector3::new(0.0, 1.0, 0.0), 0.7);

        assert_eq!(Matrix4f::new_rotation(&q), q.rotation_matrix());
    }

    #[test]
    fn new_look_at_moves_eye_to_origin() {
        let eye = Vector3::new(3.0, 2.0, 5.0);
        let target = Vector3::new(0.0, 0.5, -1.0);
        let view = Matrix4f::new_look_at(eye, target, Vector3::new(0.0, 1.0, 0.0));

        assert_vec3_eq(view.transform_vec3(&eye), Vector3::splat(0.0), 1e-5);

        let distance = (target - eye).length();
        assert_vec3_eq(
            view.transform_vec3(&target),
            Vector3::new(0.0, 0.0, -distance),
            1e-5,
        );
    }

    #[test]
    fn new_look_at_basis_is_orthonormal() {
        let view = Matrix4f::new_look_at(
            Vector3::new(-4.0, 1.0, 2.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        let rotation = view.upper_left();
        let product = rotation * rotation.transpose();

        for (actual, expected) in product
            .to_cols_array()
            .iter()
            .zip(crate::matrix::Matrix3f::identity().to_cols_array())
        {
            assert_float_absolute_eq!(*actual, expected, 1e-5);
        }
    }

    #[test]
    fn new_look_at_down_negative_z_is_identity() {
        let view = Matrix4f::new_look_at(
            Vector3::splat(0.0),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
        );

        assert_eq!(view, Matrix4f::identity());
    }

    #[test]
    fn new_perspective_vulkan_depth_and_y() {
        let m = Matrix4f::new_perspective_vulkan(std::f32::consts::FRAC_PI_2, 1.5, 0.1, 100.0);

        assert_float_absolute_eq!(project(&m, Vector3::new(0.0, 0.0, -0.1)).z, 0.0, 1e-5);
        assert_float_absolute_eq!(project(&m, Vector3::new(0.0, 0.0, -100.0)).z, 1.0, 1e-5);
        assert!(project(&m, Vector3::new(0.0, 1.0, -10.0)).y < 0.0);
        assert_float_absolute_eq!(m.z.w, -1.0, 1e-6);
        assert_float_absolute_eq!(m.x.x, 1.0 / 1.5, 1e-6);
    }

    #[test]
    fn new_perspective_opengl_depth_and_y() {
        let m = Matrix4f::new_perspective_opengl(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 10.0);

        assert_float_absolute_eq!(project(&m, Vector3::new(0.0, 0.0, -1.0)).z, -1.0, 1e-5);
        assert_float_absolute_eq!(project(&m, Vector3::new(0.0, 0.0, -10.0)).z, 1.0, 1e-5);
        assert!(project(&m, Vector3::new(0.0, 1.0, -5.0)).y > 0.0);
        // The edge of a 90 degree frustum lands on the edge of clip space.
        assert_float_absolute_eq!(project(&m, Vector3::new(0.0, 5.0, -5.0)).y, 1.0, 1e-5);
    }

    #[test]
    fn new_orthographic_zero_to_one() {
        let m = Matrix4f::new_orthographic(
            -2.0,
            2.0,
            -1.0,
            1.0,
            1.0,
            5.0,
            OrthographicDepthMode::ZeroToOne,
        );

        assert_vec3_eq(project(&m, Vector3::new(2.0, 1.0, -1.0)), Vector3::new(1.0, 1.0, 0.0), 1e-6);
        assert_vec3_eq(
            project(&m, Vector3::new(-2.0, -1.0, -5.0)),
            Vector3::new(-1.0, -1.0, 1.0),
            1e-6,
        );
    }

    #[test]
    fn new_orthographic_negative_one_to_one() {
        let m = Matrix4f::new_orthographic(
            0.0,
            4.0,
            0.0,
            2.0,
            1.0,
            3.0,
            OrthographicDepthMode::NegativeOneToOne,
        );

        assert_vec3_eq(project(&m, Vector3::new(0.0, 0.0, -1.0)), Vector3::new(-1.0, -1.0, -1.0), 1e-6);
        assert_vec3_eq(project(&m, Vector3::new(4.0, 2.0, -3.0)), Vector3::new(1.0, 1.0, 1.0), 1e-6);
    }

    #[test]
    fn new_orthographic_vulkan_flips_y() {
        let vulkan = Matrix4f::new_orthographic_vulkan(4.0, 0.0, 10.0);
        let opengl = Matrix4f::new_orthographic_opengl(4.0, 0.0, 10.0);

        assert_float_absolute_eq!(project(&vulkan, Vector3::new(0.0, 2.0, 0.0)).y, -1.0, 1e-6);
        assert_float_absolute_eq!(project(&opengl, Vector3::new(0.0, 2.0, 0.0)).y, 1.0, 1e-6);
        assert_float_absolute_eq!(project(&vulkan, Vector3::new(0.0, 0.0, -10.0)).z, 1.0, 1e-6);
        assert_float_absolute_eq!(project(&opengl, Vector3::new(0.0, 0.0, 0.0)).z, -1.0, 1e-6);
    }

    #[test]
    #[should_panic(expected = "aspect ratio must be positive")]
    fn new_perspective_with_zero_aspect_ratio() {
        let _ = Matrix4f::new_perspective_vulkan(1.0, 0.0, 0.1, 100.0);
    }

    #[test]
    fn new_perspective_reports_every_violation() {
        thread_local! {
            static CALLS: Cell<usize> = Cell::new(0);
        }

        fn count(_: &PreconditionViolation) {
            CALLS.with(|calls| calls.set(calls.get() + 1));
        }

        with_failure_handler(count, || {
            let _ = Matrix4f::new_perspective_opengl(0.0, -1.0, 2.0, 2.0);
        });
        assert_eq!(CALLS.with(Cell::get), 3);

        with_failure_handler(count, || {
            let _ = Matrix4f::new_perspective_opengl(1.0, 1.0, 0.1, 10.0);
        });
        assert_eq!(CALLS.with(Cell::get), 3);
    }

    #[test]
    #[should_panic(expected = "depth range from 1 to 1 is empty")]
    fn new_orthographic_with_empty_depth_range() {
        let _ = Matrix4f::new_orthographic_opengl(2.0, 1.0, 1.0);
    }

    #[test]
    fn orthographic_depth_mode_is_copy() {
        let mode = OrthographicDepthMode::ZeroToOne;
        let copy = mode;

        assert_eq!(mode, copy);
        assert_ne!(mode, OrthographicDepthMode::NegativeOneToOne);
    }
}
