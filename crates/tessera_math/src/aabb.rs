use crate::number_traits::Float;
use crate::vector::Vector3;
use crate::Real;

pub type Aabb3 = AxisAlignedBoundingBox3<Real>;

/// Box spanned by `min` and `max`.
///
/// The default box is empty (`min` at `+inf`, `max` at `-inf`) so the first
/// [`AxisAlignedBoundingBox3::expand_with_point`] sets real bounds.
#[must_use]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignedBoundingBox3<T = Real> {
    pub min: Vector3<T>,
    pub max: Vector3<T>,
}

impl<T> AxisAlignedBoundingBox3<T>
where
    T: Float,
{
    pub fn new(min: Vector3<T>, max: Vector3<T>) -> Self {
        Self { min, max }
    }

    pub fn expand_with_point(&mut self, point: &Vector3<T>) -> &mut Self {
        self.min = self.min.min(*point);
        self.max = self.max.max(*point);
        self
    }

    /// Inclusive on every face.
    pub fn contains(&self, point: &Vector3<T>) -> bool {
        point.greater_than_equal(&self.min).all() && point.less_than_equal(&self.max).all()
    }
}

impl<T> Default for AxisAlignedBoundingBox3<T>
where
    T: Float,
{
    fn default() -> Self {
        Self {
            min: Vector3::splat(T::infinity()),
            max: Vector3::splat(-T::infinity()),
        }
    }
}
