use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::number_traits::{Float, NumericOps, One, Zero};
use crate::precondition::{self, PreconditionViolation};
use crate::vector::{Vector3, Vector4};
use crate::Real;

pub type Matrix3f = Matrix3<f32>;
pub type Matrix3d = Matrix3<f64>;
pub type Matrix4f = Matrix4<f32>;
pub type Matrix4d = Matrix4<f64>;

/// 3x3 matrix stored as three columns.
#[must_use]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix3<T = Real> {
    pub x: Vector3<T>,
    pub y: Vector3<T>,
    pub z: Vector3<T>,
}

/// 4x4 matrix stored as four columns, `w` holding the translation of an
/// affine transform.
#[must_use]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix4<T = Real> {
    pub x: Vector4<T>,
    pub y: Vector4<T>,
    pub z: Vector4<T>,
    pub w: Vector4<T>,
}

macro_rules! impl_debug_by_rows {
    ($name:ident, $size:literal) => {
        impl<T> Debug for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                writeln!(f, "[")?;
                for row in 0..$size {
                    write!(f, "\t")?;
                    for column in 0..$size {
                        write!(f, "{}, ", self[column][row])?;
                    }
                    writeln!(f)?;
                }
                writeln!(f, "]")
            }
        }
    };
}

impl_debug_by_rows!(Matrix3, 3);
impl_debug_by_rows!(Matrix4, 4);

impl<T> Matrix3<T> {
    pub const fn from_cols(x: Vector3<T>, y: Vector3<T>, z: Vector3<T>) -> Self {
        Self { x, y, z }
    }
}

impl<T> Matrix3<T>
where
    T: Copy,
{
    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vector3::new(self.x.x, self.y.x, self.z.x),
            Vector3::new(self.x.y, self.y.y, self.z.y),
            Vector3::new(self.x.z, self.y.z, self.z.z),
        )
    }

    pub fn to_cols_array(&self) -> [T; 9] {
        let [x, y, z] = [self.x, self.y, self.z].map(Vector3::to_array);
        [
            x[0], x[1], x[2], y[0], y[1], y[2], z[0], z[1], z[2],
        ]
    }
}

impl<T> Matrix3<T>
where
    T: Copy + Zero,
{
    /// `diagonal` on the diagonal, zero everywhere else.
    #[rustfmt::skip]
    pub fn from_diagonal(diagonal: T) -> Self {
        let zero = T::zero();
        Self::from_cols(
            Vector3::new(diagonal, zero, zero),
            Vector3::new(zero, diagonal, zero),
            Vector3::new(zero, zero, diagonal),
        )
    }
}

impl<T> Matrix3<T>
where
    T: NumericOps,
{
    /// Cofactor expansion along the first column.
    pub fn determinant(&self) -> T {
        let m = self;
        m.x.x * (m.y.y * m.z.z - m.y.z * m.z.y) - m.y.x * (m.x.y * m.z.z - m.z.y * m.x.z)
            + m.z.x * (m.x.y * m.y.z - m.y.y * m.x.z)
    }

    #[rustfmt::skip]
    fn adjugate_scaled(&self, inv_det: T) -> Self {
        let m = self;
        Self::from_cols(
            Vector3::new(
                (m.y.y * m.z.z - m.y.z * m.z.y) * inv_det,
                (m.z.y * m.x.z - m.x.y * m.z.z) * inv_det,
                (m.x.y * m.y.z - m.x.z * m.y.y) * inv_det,
            ),
            Vector3::new(
                (m.z.x * m.y.z - m.y.x * m.z.z) * inv_det,
                (m.x.x * m.z.z - m.z.x * m.x.z) * inv_det,
                (m.x.z * m.y.x - m.x.x * m.y.z) * inv_det,
            ),
            Vector3::new(
                (m.y.x * m.z.y - m.z.x * m.y.y) * inv_det,
                (m.x.y * m.z.x - m.x.x * m.z.y) * inv_det,
                (m.x.x * m.y.y - m.x.y * m.y.x) * inv_det,
            ),
        )
    }
}

impl<T> Matrix3<T>
where
    T: Float,
{
    /// Adjugate divided by the determinant.
    ///
    /// A determinant smaller than the machine epsilon is reported as
    /// [`PreconditionViolation::SingularMatrix`]; if the handler returns, the
    /// result holds infinities or NaN.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det.abs() < T::epsilon() {
            precondition::report(PreconditionViolation::SingularMatrix {
                determinant: det.to_f64(),
            });
        }

        self.adjugate_scaled(T::one() / det)
    }

    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < T::epsilon() {
            return None;
        }

        Some(self.adjugate_scaled(T::one() / det))
    }
}

impl<T> Matrix4<T> {
    pub const fn from_cols(x: Vector4<T>, y: Vector4<T>, z: Vector4<T>, w: Vector4<T>) -> Self {
        Self { x, y, z, w }
    }
}

impl<T> Matrix4<T>
where
    T: Copy,
{
    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        Self::from_cols(
            Vector4::new(self.x.x, self.y.x, self.z.x, self.w.x),
            Vector4::new(self.x.y, self.y.y, self.z.y, self.w.y),
            Vector4::new(self.x.z, self.y.z, self.z.z, self.w.z),
            Vector4::new(self.x.w, self.y.w, self.z.w, self.w.w),
        )
    }

    pub fn upper_left(&self) -> Matrix3<T> {
        Matrix3::from_cols(self.x.xyz(), self.y.xyz(), self.z.xyz())
    }

    #[rustfmt::skip]
    pub fn to_cols_array(&self) -> [T; 16] {
        let [x, y, z, w] = [self.x, self.y, self.z, self.w].map(Vector4::to_array);
        [
            x[0], x[1], x[2], x[3],
            y[0], y[1], y[2], y[3],
            z[0], z[1], z[2], z[3],
            w[0], w[1], w[2], w[3],
        ]
    }
}

impl<T> Matrix4<T>
where
    T: Copy + Zero,
{
    /// `diagonal` on the diagonal, zero everywhere else.
    #[rustfmt::skip]
    pub fn from_diagonal(diagonal: T) -> Self {
        let zero = T::zero();
        Self::from_cols(
            Vector4::new(diagonal, zero, zero, zero),
            Vector4::new(zero, diagonal, zero, zero),
            Vector4::new(zero, zero, diagonal, zero),
            Vector4::new(zero, zero, zero, diagonal),
        )
    }
}

impl<T> Matrix4<T>
where
    T: NumericOps,
{
    /// The 2x2 minors of the two left columns (`s`) and of the two right
    /// columns (`c`); every cofactor of the matrix is built from them.
    fn cofactor_pairs(&self) -> ([T; 6], [T; 6]) {
        let m = self;
        let s = [
            m.x.x * m.y.y - m.y.x * m.x.y,
            m.x.x * m.y.z - m.y.x * m.x.z,
            m.x.x * m.y.w - m.y.x * m.x.w,
            m.x.y * m.y.z - m.y.y * m.x.z,
            m.x.y * m.y.w - m.y.y * m.x.w,
            m.x.z * m.y.w - m.y.z * m.x.w,
        ];
        let c = [
            m.z.x * m.w.y - m.w.x * m.z.y,
            m.z.x * m.w.z - m.w.x * m.z.z,
            m.z.x * m.w.w - m.w.x * m.z.w,
            m.z.y * m.w.z - m.w.y * m.z.z,
            m.z.y * m.w.w - m.w.y * m.z.w,
            m.z.z * m.w.w - m.w.z * m.z.w,
        ];
        (s, c)
    }

    fn determinant_from_pairs(s: &[T; 6], c: &[T; 6]) -> T {
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    pub fn determinant(&self) -> T {
        let (s, c) = self.cofactor_pairs();
        Self::determinant_from_pairs(&s, &c)
    }

    #[rustfmt::skip]
    fn adjugate_scaled(&self, s: &[T; 6], c: &[T; 6], inv_det: T) -> Self {
        let m = self;
        Self::from_cols(
            Vector4::new(
                (m.y.y * c[5] - m.y.z * c[4] + m.y.w * c[3]) * inv_det,
                (m.x.z * c[4] - m.x.y * c[5] - m.x.w * c[3]) * inv_det,
                (m.w.y * s[5] - m.w.z * s[4] + m.w.w * s[3]) * inv_det,
                (m.z.z * s[4] - m.z.y * s[5] - m.z.w * s[3]) * inv_det,
            ),
            Vector4::new(
                (m.y.z * c[2] - m.y.x * c[5] - m.y.w * c[1]) * inv_det,
                (m.x.x * c[5] - m.x.z * c[2] + m.x.w * c[1]) * inv_det,
                (m.w.z * s[2] - m.w.x * s[5] - m.w.w * s[1]) * inv_det,
                (m.z.x * s[5] - m.z.z * s[2] + m.z.w * s[1]) * inv_det,
            ),
            Vector4::new(
                (m.y.x * c[4] - m.y.y * c[2] + m.y.w * c[0]) * inv_det,
                (m.x.y * c[2] - m.x.x * c[4] - m.x.w * c[0]) * inv_det,
                (m.w.x * s[4] - m.w.y * s[2] + m.w.w * s[0]) * inv_det,
                (m.z.y * s[2] - m.z.x * s[4] - m.z.w * s[0]) * inv_det,
            ),
            Vector4::new(
                (m.y.y * c[1] - m.y.x * c[3] - m.y.z * c[0]) * inv_det,
                (m.x.x * c[3] - m.x.y * c[1] + m.x.z * c[0]) * inv_det,
                (m.w.y * s[1] - m.w.x * s[3] - m.w.z * s[0]) * inv_det,
                (m.z.x * s[3] - m.z.y * s[1] + m.z.z * s[0]) * inv_det,
            ),
        )
    }

    pub fn transform_vec3(&self, vec: &Vector3<T>) -> Vector3<T> {
        (*self * vec.extend(T::one())).xyz()
    }
}

impl<T> Matrix4<T>
where
    T: Float,
{
    /// Adjugate divided by the determinant, both built from the shared 2x2
    /// minors of [`Matrix4::cofactor_pairs`].
    ///
    /// A determinant smaller than the machine epsilon is reported as
    /// [`PreconditionViolation::SingularMatrix`]; if the handler returns, the
    /// result holds infinities or NaN.
    pub fn inverse(&self) -> Self {
        let (s, c) = self.cofactor_pairs();
        let det = Self::determinant_from_pairs(&s, &c);
        if det.abs() < T::epsilon() {
            precondition::report(PreconditionViolation::SingularMatrix {
                determinant: det.to_f64(),
            });
        }

        self.adjugate_scaled(&s, &c, T::one() / det)
    }

    pub fn try_inverse(&self) -> Option<Self> {
        let (s, c) = self.cofactor_pairs();
        let det = Self::determinant_from_pairs(&s, &c);
        if det.abs() < T::epsilon() {
            return None;
        }

        Some(self.adjugate_scaled(&s, &c, T::one() / det))
    }
}

impl<T> From<Matrix3<T>> for Matrix4<T>
where
    T: Copy + Zero + One,
{
    fn from(m: Matrix3<T>) -> Self {
        Self::from_cols(
            m.x.extend(T::zero()),
            m.y.extend(T::zero()),
            m.z.extend(T::zero()),
            Vector4::new(T::zero(), T::zero(), T::zero(), T::one()),
        )
    }
}

impl<T> Mul for Matrix3<T>
where
    T: NumericOps,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let rows = self.transpose();
        let column = |c: Vector3<T>| Vector3::new(rows.x.dot(&c), rows.y.dot(&c), rows.z.dot(&c));
        Self::from_cols(column(rhs.x), column(rhs.y), column(rhs.z))
    }
}

impl<T> Mul<Vector3<T>> for Matrix3<T>
where
    T: NumericOps,
{
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        let rows = self.transpose();
        Vector3::new(rows.x.dot(&rhs), rows.y.dot(&rhs), rows.z.dot(&rhs))
    }
}

impl<T> Mul<T> for Matrix3<T>
where
    T: NumericOps,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::from_cols(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T> MulAssign for Matrix3<T>
where
    T: NumericOps,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T> Mul for Matrix4<T>
where
    T: NumericOps,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let rows = self.transpose();
        let column = |c: Vector4<T>| {
            Vector4::new(
                rows.x.dot(&c),
                rows.y.dot(&c),
                rows.z.dot(&c),
                rows.w.dot(&c),
            )
        };
        Self::from_cols(column(rhs.x), column(rhs.y), column(rhs.z), column(rhs.w))
    }
}

impl<T> Mul<Vector4<T>> for Matrix4<T>
where
    T: NumericOps,
{
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Self::Output {
        let rows = self.transpose();
        Vector4::new(
            rows.x.dot(&rhs),
            rows.y.dot(&rhs),
            rows.z.dot(&rhs),
            rows.w.dot(&rhs),
        )
    }
}

impl<T> Mul<T> for Matrix4<T>
where
    T: NumericOps,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::from_cols(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl<T> MulAssign for Matrix4<T>
where
    T: NumericOps,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

macro_rules! scalar_lhs_mul {
    ($name:ident for $($scalar:ty),*) => {
        $(
            impl Mul<$name<$scalar>> for $scalar {
                type Output = $name<$scalar>;

                fn mul(self, rhs: $name<$scalar>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

scalar_lhs_mul!(Matrix3 for i32, i64, u32, u64, f32, f64);
scalar_lhs_mul!(Matrix4 for i32, i64, u32, u64, f32, f64);

impl<T> Index<usize> for Matrix3<T> {
    type Output = Vector3<T>;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Matrix3 has no column {index}"),
        }
    }
}

impl<T> IndexMut<usize> for Matrix3<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Matrix3 has no column {index}"),
        }
    }
}

impl<T> Index<usize> for Matrix4<T> {
    type Output = Vector4<T>;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Matrix4 has no column {index}"),
        }
    }
}

impl<T> IndexMut<usize> for Matrix4<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Matrix4 has no column {index}"),
        }
    }
}

impl<T> From<[[T; 3]; 3]> for Matrix3<T>
where
    T: Copy,
{
    fn from(columns: [[T; 3]; 3]) -> Self {
        let [x, y, z] = columns.map(Vector3::from);
        Self::from_cols(x, y, z)
    }
}

impl<T> From<[[T; 4]; 4]> for Matrix4<T>
where
    T: Copy,
{
    fn from(columns: [[T; 4]; 4]) -> Self {
        let [x, y, z, w] = columns.map(Vector4::from);
        Self::from_cols(x, y, z, w)
    }
}

impl<T> From<Matrix4<T>> for [[T; 4]; 4]
where
    T: Copy,
{
    fn from(matrix: Matrix4<T>) -> Self {
        [matrix.x, matrix.y, matrix.z, matrix.w].map(Vector4::to_array)
    }
}

pub trait Identity {
    fn identity() -> Self;
}

impl<T> Identity for Matrix3<T>
where
    T: Copy + One + Zero,
{
    fn identity() -> Self {
        Self::from_diagonal(T::one())
    }
}

impl<T> Identity for Matrix4<T>
where
    T: Copy + One + Zero,
{
    fn identity() -> Self {
        Self::from_diagonal(T::one())
    }
}

impl<T> Default for Matrix3<T>
where
    T: Copy + One + Zero,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Default for Matrix4<T>
where
    T: Copy + One + Zero,
{
    fn default() -> Self {
        Self::identity()
    }
}
