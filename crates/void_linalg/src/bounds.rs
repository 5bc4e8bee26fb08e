//! Bounding volumes

use crate::matrix::Mat4;
use crate::scalar::abs;
use crate::vector::Vec3;

/// Axis-aligned box spanning `min..=max`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent3 {
    pub min: Vec3,
    pub max: Vec3,
}

/// Smallest extent enclosing both `a` and `b`.
#[inline]
pub fn outer_extent(a: &Extent3, b: &Extent3) -> Extent3 {
    Extent3::new(a.min.min(b.min), a.max.max(b.max))
}

impl Extent3 {
    /// Inverted extent; growing it by any point gives that point.
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    pub fn from_points(points: &[Vec3]) -> Self {
        points.iter().fold(Self::EMPTY, |e, &p| e.expand_to_include(p))
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// True when `min > max` on any axis
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Boundary points count as inside.
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    #[inline]
    pub fn expand_to_include(self, point: Vec3) -> Self {
        Self::new(self.min.min(point), self.max.max(point))
    }

    /// Method form of [`outer_extent`]
    #[inline]
    pub fn union(&self, other: &Extent3) -> Self {
        outer_extent(self, other)
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Axis-aligned bounds of the transformed corners
    pub fn transform(&self, matrix: &Mat4) -> Self {
        let corners = self.corners().map(|c| matrix.transform_point(c));
        Self::from_points(&corners)
    }
}

/// Oriented bounding box.
///
/// `local_x`, `local_y` and `local_z` are the box axes and are expected to be
/// orthonormal; `halfwidths` holds the half size along each of them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obb {
    pub center: Vec3,
    pub local_x: Vec3,
    pub local_y: Vec3,
    pub local_z: Vec3,
    pub halfwidths: Vec3,
}

impl Obb {
    #[inline]
    pub const fn new(center: Vec3, local_x: Vec3, local_y: Vec3, local_z: Vec3, halfwidths: Vec3) -> Self {
        Self { center, local_x, local_y, local_z, halfwidths }
    }

    /// Box aligned with the world axes
    pub fn from_extent(extent: &Extent3) -> Self {
        Self::new(extent.center(), Vec3::X, Vec3::Y, Vec3::Z, extent.half_extents())
    }

    /// `point` expressed along the box axes, relative to the center
    #[inline]
    pub fn to_local(&self, point: Vec3) -> Vec3 {
        let d = point - self.center;
        Vec3::new(d.dot(self.local_x), d.dot(self.local_y), d.dot(self.local_z))
    }

    /// Boundary points count as inside.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let local = self.to_local(point);
        abs(local.x) <= self.halfwidths.x
            && abs(local.y) <= self.halfwidths.y
            && abs(local.z) <= self.halfwidths.z
    }

    /// Tightest axis-aligned extent enclosing the box
    pub fn to_extent(&self) -> Extent3 {
        let axes = [self.local_x, self.local_y, self.local_z];
        let mut half = Vec3::ZERO;
        for (axis, hw) in axes.iter().zip(self.halfwidths.to_array()) {
            half += Vec3::new(abs(axis.x), abs(axis.y), abs(axis.z)) * hw;
        }
        Extent3::from_center_half_extents(self.center, half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quaternion::Quat;
    use approx::assert_abs_diff_eq;

    fn unit_cube() -> Extent3 {
        Extent3::new(Vec3::splat(-1.0), Vec3::ONE)
    }

    #[test]
    fn test_extent_center_and_half_extents() {
        let e = Extent3::new(Vec3::new(0.0, 2.0, -4.0), Vec3::new(2.0, 6.0, 0.0));
        assert_eq!(e.center(), Vec3::new(1.0, 4.0, -2.0));
        assert_eq!(e.half_extents(), Vec3::new(1.0, 2.0, 2.0));
        assert_eq!(e.size(), Vec3::new(2.0, 4.0, 4.0));
        assert_eq!(Extent3::from_center_half_extents(e.center(), e.half_extents()), e);
    }

    #[test]
    fn test_outer_extent() {
        let a = Extent3::new(Vec3::ZERO, Vec3::ONE);
        let b = Extent3::new(Vec3::new(-1.0, 0.5, 0.5), Vec3::new(0.5, 3.0, 0.75));
        let outer = outer_extent(&a, &b);
        assert_eq!(outer, Extent3::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 3.0, 1.0)));
        assert_eq!(a.union(&b), outer);
        assert_eq!(outer_extent(&a, &Extent3::EMPTY), a);
    }

    #[test]
    fn test_extent_contains_point() {
        let e = unit_cube();
        assert!(e.contains_point(Vec3::ZERO));
        assert!(e.contains_point(Vec3::ONE));
        assert!(!e.contains_point(Vec3::new(1.01, 0.0, 0.0)));
    }

    #[test]
    fn test_extent_from_points() {
        let e = Extent3::from_points(&[Vec3::new(1.0, -2.0, 0.0), Vec3::new(-1.0, 3.0, 2.0)]);
        assert_eq!(e, Extent3::new(Vec3::new(-1.0, -2.0, 0.0), Vec3::new(1.0, 3.0, 2.0)));
        assert!(Extent3::from_points(&[]).is_empty());
        assert!(!e.is_empty());
    }

    #[test]
    fn test_extent_transform() {
        let m = crate::transform::translate(Vec3::new(5.0, 0.0, 0.0)) * crate::transform::scale_uniform(2.0);
        let e = unit_cube().transform(&m);
        assert_eq!(e, Extent3::new(Vec3::new(3.0, -2.0, -2.0), Vec3::new(7.0, 2.0, 2.0)));
    }

    #[test]
    fn test_obb_axis_aligned_matches_extent() {
        let e = Extent3::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(4.0, 2.0, 2.0));
        let obb = Obb::from_extent(&e);
        assert!(obb.contains_point(Vec3::new(3.9, 1.0, 0.1)));
        assert!(!obb.contains_point(Vec3::new(4.1, 1.0, 1.0)));
        assert_eq!(obb.to_extent(), e);
    }

    #[test]
    fn test_rotated_obb() {
        let q = Quat::from_rotation_z(core::f32::consts::FRAC_PI_4);
        let obb = Obb::new(Vec3::ZERO, q * Vec3::X, q * Vec3::Y, q * Vec3::Z, Vec3::new(1.0, 1.0, 1.0));

        // corner of the axis-aligned cube sticks out of the rotated one
        assert!(!obb.contains_point(Vec3::new(0.95, 0.95, 0.0)));
        assert!(obb.contains_point(Vec3::new(1.4, 0.0, 0.0)));

        let h = core::f32::consts::SQRT_2;
        let e = obb.to_extent();
        assert_abs_diff_eq!(e.max, Vec3::new(h, h, 1.0), epsilon = 1e-5);
        assert_abs_diff_eq!(e.min, Vec3::new(-h, -h, -1.0), epsilon = 1e-5);
    }
}
