use std::fmt::{Display, Formatter};
use std::ops::{
    Add, AddAssign, BitAnd, BitOr, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Sub,
    SubAssign,
};

use crate::number_traits::{partial_max, partial_min, Float, NumericOps, Zero};
use crate::Real;

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;
pub type Vector2d = Vector2<f64>;
pub type Vector3d = Vector3<f64>;
pub type Vector4d = Vector4<f64>;
pub type Vector2i = Vector2<i32>;
pub type Vector3i = Vector3<i32>;
pub type Vector4i = Vector4<i32>;
pub type Vector2u = Vector2<u32>;
pub type Vector3u = Vector3<u32>;
pub type Vector4u = Vector4<u32>;
pub type Vector2b = Vector2<bool>;
pub type Vector3b = Vector3<bool>;
pub type Vector4b = Vector4<bool>;
pub type Vector2r = Vector2<Real>;
pub type Vector3r = Vector3<Real>;
pub type Vector4r = Vector4<Real>;

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, $len:literal, ($($dim:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[repr(C)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub struct $name<T = Real> {
            $(pub $dim: T,)*
        }

        impl<T> $name<T> {
            pub const fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }
        }

        impl<T> $name<T>
        where T: Copy {
            /// Broadcasts `value` to every component.
            pub const fn splat(value: T) -> Self {
                Self {
                    $($dim: value),*
                }
            }

            pub fn to_array(self) -> [T; $len] {
                [$(self.$dim),*]
            }

            pub fn map<U>(self, f: impl Fn(T) -> U) -> $name<U> {
                $name {
                    $($dim: f(self.$dim)),*
                }
            }

            pub fn zip_map<U, R>(self, other: $name<U>, f: impl Fn(T, U) -> R) -> $name<R>
            where U: Copy {
                $name {
                    $($dim: f(self.$dim, other.$dim)),*
                }
            }
        }

        impl<T> $name<T>
        where T: NumericOps {
            pub fn length2(&self) -> T {
                self.dot(self)
            }

            pub fn min(self, other: Self) -> Self {
                self.zip_map(other, partial_min)
            }

            pub fn max(self, other: Self) -> Self {
                self.zip_map(other, partial_max)
            }

            /// Component-wise `max(min_edge, min(self, max_edge))`.
            pub fn clamp(self, min_edge: Self, max_edge: Self) -> Self {
                min_edge.max(self.min(max_edge))
            }
        }

        impl<T> $name<T>
        where T: PartialOrd + Copy {
            pub fn less_than(&self, other: &Self) -> $name<bool> {
                self.zip_map(*other, |a, b| a < b)
            }

            pub fn less_than_equal(&self, other: &Self) -> $name<bool> {
                self.zip_map(*other, |a, b| a <= b)
            }

            pub fn greater_than(&self, other: &Self) -> $name<bool> {
                self.zip_map(*other, |a, b| a > b)
            }

            pub fn greater_than_equal(&self, other: &Self) -> $name<bool> {
                self.zip_map(*other, |a, b| a >= b)
            }
        }

        impl<T> $name<T>
        where T: Float {
            pub fn length(&self) -> T {
                self.length2().sqrt()
            }

            pub fn distance(&self, other: &Self) -> T {
                (*self - *other).length()
            }

            /// Divides every component by the length. A zero-length vector
            /// ends up with NaN components.
            pub fn normalize(&mut self) {
                let length = self.length();
                $(self.$dim /= length;)*
            }

            pub fn normalized(&self) -> Self {
                let mut normalized = *self;
                normalized.normalize();
                normalized
            }

            /// `(1 - t) * self + t * other`, `t` is not clamped.
            pub fn lerp(self, other: Self, t: T) -> Self {
                self * (T::one() - t) + other * t
            }
        }

        impl $name<bool> {
            pub fn any(&self) -> bool {
                false $(|| self.$dim)*
            }

            pub fn all(&self) -> bool {
                true $(&& self.$dim)*
            }
        }

        impl Not for $name<bool> {
            type Output = Self;

            fn not(self) -> Self::Output {
                Self {
                    $($dim: !self.$dim),*
                }
            }
        }

        impl BitOr for $name<bool> {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim || rhs.$dim),*
                }
            }
        }

        impl BitAnd for $name<bool> {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim && rhs.$dim),*
                }
            }
        }

        impl<T> Default for $name<T>
        where T: Zero {
            fn default() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> Add<T> for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs),*
                }
            }
        }

        impl<T> AddAssign for $name<T>
        where
            T: Copy + AddAssign, {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$dim += rhs.$dim;)*
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> Sub<T> for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs),*
                }
            }
        }

        impl<T> SubAssign for $name<T>
        where
            T: Copy + SubAssign, {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$dim -= rhs.$dim;)*
            }
        }

        impl<T> Mul for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs.$dim),*
                }
            }
        }

        impl<T> MulAssign for $name<T>
        where
            T: Copy + MulAssign, {
            fn mul_assign(&mut self, rhs: Self) {
                $(self.$dim *= rhs.$dim;)*
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> MulAssign<T> for $name<T>
        where
            T: Copy + MulAssign, {
            fn mul_assign(&mut self, rhs: T) {
                $(self.$dim *= rhs;)*
            }
        }

        impl<T> Div for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs.$dim),*
                }
            }
        }

        impl<T> DivAssign for $name<T>
        where
            T: Copy + DivAssign, {
            fn div_assign(&mut self, rhs: Self) {
                $(self.$dim /= rhs.$dim;)*
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> DivAssign<T> for $name<T>
        where
            T: Copy + DivAssign, {
            fn div_assign(&mut self, rhs: T) {
                $(self.$dim /= rhs;)*
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = T;

            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$dim,)*
                    _ => panic!("{} has no component {index}", stringify!($name)),
                }
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                match index {
                    $($idx => &mut self.$dim,)*
                    _ => panic!("{} has no component {index}", stringify!($name)),
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T>
        where
            T: Copy {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }

        impl<T> From<[T; $len]> for $name<T>
        where
            T: Copy,
        {
            fn from(value: [T; $len]) -> Self {
                Self {
                    $($dim: value[$idx]),*
                }
            }
        }

        impl<T> From<$name<T>> for [T; $len]
        where
            T: Copy,
        {
            fn from(value: $name<T>) -> Self {
                value.to_array()
            }
        }
    };
}

struct_vec!(Vector2: "({}, {})", 2, (x: T => 0, y: T => 1,));
struct_vec!(Vector3: "({}, {}, {})", 3, (x: T => 0, y: T => 1, z: T => 2,));
struct_vec!(Vector4: "({}, {}, {}, {})", 4, (x: T => 0, y: T => 1, z: T => 2, w: T => 3,));

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

scalar_lhs_mul!(Vector2 for i32, i64, u32, u64, f32, f64);
scalar_lhs_mul!(Vector3 for i32, i64, u32, u64, f32, f64);
scalar_lhs_mul!(Vector4 for i32, i64, u32, u64, f32, f64);

impl<T> Vector2<T>
where
    T: NumericOps,
{
    pub fn dot(&self, other: &Vector2<T>) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl<T> Vector3<T>
where
    T: NumericOps,
{
    /// Right-handed cross product.
    pub fn cross(&self, other: &Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn dot(&self, other: &Vector3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T> Vector3<T> {
    /// Appends `w`, e.g. `1` for a point or `0` for a direction.
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }
}

impl<T> Vector4<T>
where
    T: NumericOps,
{
    pub fn dot(&self, other: &Vector4<T>) -> T {
        T::dot4(self.to_array(), other.to_array())
    }
}

impl<T> Vector4<T>
where
    T: Copy,
{
    /// Drops the homogeneous coordinate.
    pub fn xyz(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

pub const GLOBAL_X: Vector3<Real> = Vector3::new(1.0, 0.0, 0.0);
pub const GLOBAL_Y: Vector3<Real> = Vector3::new(0.0, 1.0, 0.0);
pub const GLOBAL_Z: Vector3<Real> = Vector3::new(0.0, 0.0, 1.0);

pub const GLOBAL_RIGHT: Vector3<Real> = GLOBAL_X;
pub const GLOBAL_UP: Vector3<Real> = GLOBAL_Y;
pub const GLOBAL_FORWARD: Vector3<Real> = Vector3::new(0.0, 0.0, -1.0);
