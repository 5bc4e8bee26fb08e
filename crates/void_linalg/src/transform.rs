//! Transform construction
//!
//! Free functions that build 4x4 matrices for the usual graphics pipeline
//! stages, plus [`Transform`], the translation/rotation/scale triple that a
//! matrix decomposes into.
//!
//! Rotations are counter-clockwise when looking down the axis towards the
//! origin, and agree with [`Quat::from_rotation_x`] and friends.

use crate::matrix::{Mat3, Mat4};
use crate::quaternion::Quat;
use crate::scalar::{cos, sin, tan};
use crate::vector::{Vec3, Vec4};

/// Translation by `translation`
#[inline]
pub fn translate(translation: Vec3) -> Mat4 {
    Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::Z, translation.extend(1.0))
}

/// Per-axis scale
#[inline]
pub fn scale(scale: Vec3) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(scale.x, 0.0, 0.0, 0.0),
        Vec4::new(0.0, scale.y, 0.0, 0.0),
        Vec4::new(0.0, 0.0, scale.z, 0.0),
        Vec4::W,
    )
}

/// Uniform scale
#[inline]
pub fn scale_uniform(factor: f32) -> Mat4 {
    scale(Vec3::splat(factor))
}

/// Rotation matrix of a unit quaternion
#[inline]
pub fn rotate(q: Quat) -> Mat4 {
    q.to_mat4()
}

#[inline]
pub fn rotate_x(angle: f32) -> Mat4 {
    let (s, c) = (sin(angle), cos(angle));
    Mat4::from_cols(
        Vec4::X,
        Vec4::new(0.0, c, s, 0.0),
        Vec4::new(0.0, -s, c, 0.0),
        Vec4::W,
    )
}

#[inline]
pub fn rotate_y(angle: f32) -> Mat4 {
    let (s, c) = (sin(angle), cos(angle));
    Mat4::from_cols(
        Vec4::new(c, 0.0, -s, 0.0),
        Vec4::Y,
        Vec4::new(s, 0.0, c, 0.0),
        Vec4::W,
    )
}

#[inline]
pub fn rotate_z(angle: f32) -> Mat4 {
    let (s, c) = (sin(angle), cos(angle));
    Mat4::from_cols(
        Vec4::new(c, s, 0.0, 0.0),
        Vec4::new(-s, c, 0.0, 0.0),
        Vec4::Z,
        Vec4::W,
    )
}

/// Orthographic projection to `[-1, 1]` clip depth, right-handed (camera looks down -Z)
pub fn orthographic_rh(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rml = right - left;
    let tmb = top - bottom;
    let fmn = far - near;

    Mat4::from_cols(
        Vec4::new(2.0 / rml, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 / tmb, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -2.0 / fmn, 0.0),
        Vec4::new(-(right + left) / rml, -(top + bottom) / tmb, -(far + near) / fmn, 1.0),
    )
}

/// Orthographic projection to `[-1, 1]` clip depth, left-handed (camera looks down +Z)
pub fn orthographic_lh(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let mut m = orthographic_rh(left, right, bottom, top, near, far);
    m.cols[2].z = -m.cols[2].z;
    m
}

/// Perspective projection to `[-1, 1]` clip depth, right-handed.
///
/// `fov_y` is the vertical field of view in radians, `aspect` is width / height.
pub fn perspective_rh(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let inv_tan = 1.0 / tan(fov_y * 0.5);
    let fmn = far - near;

    Mat4::from_cols(
        Vec4::new(inv_tan / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, inv_tan, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -(far + near) / fmn, -1.0),
        Vec4::new(0.0, 0.0, -2.0 * far * near / fmn, 0.0),
    )
}

/// Perspective projection to `[0, 1]` clip depth (Vulkan, wgpu, D3D), right-handed.
pub fn perspective_rh_zo(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let inv_tan = 1.0 / tan(fov_y * 0.5);
    let fmn = far - near;

    Mat4::from_cols(
        Vec4::new(inv_tan / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, inv_tan, 0.0, 0.0),
        Vec4::new(0.0, 0.0, -far / fmn, -1.0),
        Vec4::new(0.0, 0.0, -far * near / fmn, 0.0),
    )
}

/// Perspective projection to `[-1, 1]` clip depth, left-handed.
pub fn perspective_lh(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let inv_tan = 1.0 / tan(fov_y * 0.5);
    let fmn = far - near;

    Mat4::from_cols(
        Vec4::new(inv_tan / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, inv_tan, 0.0, 0.0),
        Vec4::new(0.0, 0.0, (far + near) / fmn, 1.0),
        Vec4::new(0.0, 0.0, -2.0 * near * far / fmn, 0.0),
    )
}

/// Right-handed view matrix placing `eye` at the origin looking at `center`.
///
/// `up` must not be parallel to `center - eye`; a parallel `up` gives `NaN`s.
pub fn lookat_rh(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let forward = (center - eye).normalize();
    let side = forward.cross(up).normalize();
    let up = side.cross(forward);

    Mat4::from_cols(
        Vec4::new(side.x, up.x, -forward.x, 0.0),
        Vec4::new(side.y, up.y, -forward.y, 0.0),
        Vec4::new(side.z, up.z, -forward.z, 0.0),
        Vec4::new(-side.dot(eye), -up.dot(eye), forward.dot(eye), 1.0),
    )
}

/// Splits a translate * rotate * scale matrix into its parts.
///
/// Scale is the length of each basis column, so shear and mirroring are not
/// recovered. A zero scale axis yields `NaN` rotation components.
pub fn decompose(m: &Mat4) -> Transform {
    let [c0, c1, c2, c3] = m.cols;
    let scale = Vec3::new(c0.xyz().length(), c1.xyz().length(), c2.xyz().length());
    let rotation = Mat3::from_cols(c0.xyz() / scale.x, c1.xyz() / scale.y, c2.xyz() / scale.z);

    Transform {
        translation: c3.xyz(),
        rotation: Quat::from_mat3(&rotation),
        scale,
    }
}

/// Decomposed affine transform: scale, then rotate, then translate
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[inline]
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { translation, rotation, scale }
    }

    #[inline]
    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    #[inline]
    pub fn from_rotation(rotation: Quat) -> Self {
        Self { rotation, ..Self::IDENTITY }
    }

    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self { scale, ..Self::IDENTITY }
    }

    /// `translate(t) * rotate(r) * scale(s)`
    pub fn to_matrix(&self) -> Mat4 {
        let r = self.rotation.to_mat3();
        Mat4::from_cols(
            (r.cols[0] * self.scale.x).extend(0.0),
            (r.cols[1] * self.scale.y).extend(0.0),
            (r.cols[2] * self.scale.z).extend(0.0),
            self.translation.extend(1.0),
        )
    }

    /// Same as [`decompose`].
    #[inline]
    pub fn from_matrix(m: &Mat4) -> Self {
        decompose(m)
    }

    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.translation + self.rotation * (point * self.scale)
    }

    /// Transform a direction (ignores translation and scale)
    #[inline]
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation * direction
    }

    /// Lerps translation and scale, slerps rotation.
    pub fn lerp(&self, other: &Transform, t: f32) -> Self {
        Self {
            translation: self.translation.lerp(other.translation, t),
            rotation: self.rotation.slerp(other.rotation, t),
            scale: self.scale.lerp(other.scale, t),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Transform> for Mat4 {
    fn from(t: Transform) -> Self {
        t.to_matrix()
    }
}
