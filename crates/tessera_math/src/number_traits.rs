use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait Zero {
    fn zero() -> Self;
}

pub trait One {
    fn one() -> Self;
}

pub trait Two {
    fn two() -> Self;
}

macro_rules! impl_constants {
    ($($ty:ty => $zero:literal, $one:literal, $two:literal;)*) => {
        $(
            impl Zero for $ty {
                fn zero() -> Self {
                    $zero
                }
            }

            impl One for $ty {
                fn one() -> Self {
                    $one
                }
            }

            impl Two for $ty {
                fn two() -> Self {
                    $two
                }
            }
        )*
    };
}

impl_constants! {
    i32 => 0, 1, 2;
    i64 => 0, 1, 2;
    u32 => 0, 1, 2;
    u64 => 0, 1, 2;
    f32 => 0.0, 1.0, 2.0;
    f64 => 0.0, 1.0, 2.0;
}

pub trait Pi {
    fn pi() -> Self;
}

impl Pi for f32 {
    fn pi() -> Self {
        std::f32::consts::PI
    }
}

impl Pi for f64 {
    fn pi() -> Self {
        std::f64::consts::PI
    }
}

/// Element types vectors and matrices can do arithmetic with.
pub trait NumericOps:
    Sized
    + Copy
    + Debug
    + Zero
    + One
    + Two
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + PartialOrd
{
    /// Sum of the component-wise products of two 4-component arrays.
    ///
    /// Types with a faster path (see [`crate::simd`]) override this; the
    /// provided body is the reference result.
    fn dot4(lhs: [Self; 4], rhs: [Self; 4]) -> Self {
        lhs[0] * rhs[0] + lhs[1] * rhs[1] + lhs[2] * rhs[2] + lhs[3] * rhs[3]
    }
}

impl NumericOps for i32 {}

impl NumericOps for i64 {}

impl NumericOps for u32 {}

impl NumericOps for u64 {}

impl NumericOps for f32 {
    fn dot4(lhs: [Self; 4], rhs: [Self; 4]) -> Self {
        crate::simd::dot4(lhs, rhs)
    }
}

impl NumericOps for f64 {}

pub trait Float: Display + NumericOps + Pi + Neg<Output = Self> {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn half(self) -> Self;
    fn squared(self) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn epsilon() -> Self;
    fn infinity() -> Self;
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
}

macro_rules! impl_float {
    ($($ty:ident),*) => {
        $(
            impl Float for $ty {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn half(self) -> Self {
                    self * 0.5
                }

                fn squared(self) -> Self {
                    self * self
                }

                fn sqrt(self) -> Self {
                    self.sqrt()
                }

                fn abs(self) -> Self {
                    self.abs()
                }

                fn epsilon() -> Self {
                    $ty::EPSILON
                }

                fn infinity() -> Self {
                    $ty::INFINITY
                }

                #[allow(clippy::cast_possible_truncation)]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                #[allow(clippy::cast_lossless)]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_float!(f32, f64);

/// `std::min` semantics for partially ordered values: `lhs` wins ties.
pub(crate) fn partial_min<T: PartialOrd>(lhs: T, rhs: T) -> T {
    if rhs < lhs {
        rhs
    } else {
        lhs
    }
}

/// `std::max` semantics for partially ordered values: `lhs` wins ties.
pub(crate) fn partial_max<T: PartialOrd>(lhs: T, rhs: T) -> T {
    if lhs < rhs {
        rhs
    } else {
        lhs
    }
}
