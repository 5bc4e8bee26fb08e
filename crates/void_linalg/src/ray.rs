//! 3D Ray for picking and projection queries

use crate::matrix::Mat4;
use crate::scalar::max;
use crate::vector::Vec3;

/// Half-line `origin + t * direction` for `t >= 0`.
///
/// The direction is stored as given. Nothing here requires it to be unit
/// length, but then `t` is measured in multiples of `|direction|`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const X_AXIS: Self = Self::new(Vec3::ZERO, Vec3::X);
    pub const Y_AXIS: Self = Self::new(Vec3::ZERO, Vec3::Y);
    pub const Z_AXIS: Self = Self::new(Vec3::ZERO, Vec3::Z);

    #[inline]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray from `start` through `end`; `at(1.0)` is `end`.
    #[inline]
    pub fn from_points(start: Vec3, end: Vec3) -> Self {
        Self::new(start, end - start)
    }

    /// Same origin, unit direction
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::new(self.origin, self.direction.normalize())
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray parameter of the point closest to `point`, clamped to `t >= 0`.
    ///
    /// A zero direction gives `NaN`.
    #[inline]
    pub fn closest_parameter(&self, point: Vec3) -> f32 {
        let t = (point - self.origin).dot(self.direction) / self.direction.length_squared();
        max(t, 0.0)
    }

    /// Get the closest point on the ray to a given point
    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        self.at(self.closest_parameter(point))
    }

    pub fn distance_squared_to_point(&self, point: Vec3) -> f32 {
        (point - self.closest_point(point)).length_squared()
    }

    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        (point - self.closest_point(point)).length()
    }

    /// Origin is transformed as a point, direction as a vector.
    /// The direction is not renormalized.
    pub fn transform(&self, matrix: &Mat4) -> Self {
        Self::new(
            matrix.transform_point(self.origin),
            matrix.transform_vector(self.direction),
        )
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::Z_AXIS
    }
}
