//! # void_linalg - Linear Algebra Primitives
//!
//! Single-precision vectors, matrices and quaternions for 3D graphics and
//! simulation code, plus the transform-construction helpers built on top.
//!
//! All types are small `Copy` values laid out as tightly packed `f32`s
//! (matrices are column-major), so they can be handed to graphics APIs as-is.
//!
//! Degenerate input never panics and never returns an error on the numeric
//! paths: dividing by zero, inverting a singular matrix or normalizing a
//! near-zero vector produce IEEE `NaN`/`inf` or a documented sentinel.
//!
//! ```
//! use void_linalg::prelude::*;
//!
//! let m = translate(Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(m * Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
//! ```

pub mod scalar;
pub mod bits;
pub mod vector;
pub mod matrix;
pub mod quaternion;
pub mod transform;
pub mod bounds;
pub mod ray;
pub mod error;

pub use scalar::*;
pub use bits::*;
pub use vector::*;
pub use matrix::*;
pub use quaternion::*;
pub use transform::*;
pub use bounds::*;
pub use ray::*;
pub use error::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const HALF_PI: f32 = core::f32::consts::FRAC_PI_2;
    pub const TWO_PI: f32 = core::f32::consts::TAU;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
    /// Largest representable value
    pub const LARGEST_REPRESENTABLE: f32 = f32::MAX;
    /// Smallest number such that `1.0 + EPSILON != 1.0`
    pub const EPSILON: f32 = f32::EPSILON;
    pub const INFINITY: f32 = f32::INFINITY;
    pub const GOLDEN_RATIO: f32 = 1.618_034;

    /// Per-component tolerance used by `normalize` and `is_almost_zero`
    pub const NORMALIZE_TOLERANCE: f32 = 1e-6;
    /// Vector slerp falls back to lerp when the angle cosine reaches this
    pub const VEC_SLERP_THRESHOLD: f32 = 0.995;
    /// Quaternion slerp falls back to lerp when the angle cosine reaches this
    pub const QUAT_SLERP_THRESHOLD: f32 = 0.9999;
}

pub mod prelude {
    pub use crate::vector::{Vec2, Vec3, Vec4};
    pub use crate::matrix::{Mat2, Mat3, Mat4};
    pub use crate::quaternion::{AxisAngle, Quat};
    pub use crate::transform::{
        decompose, lookat_rh, orthographic_lh, orthographic_rh, perspective_lh, perspective_rh,
        perspective_rh_zo, rotate, rotate_x, rotate_y, rotate_z, scale, scale_uniform, translate,
        Transform,
    };
    pub use crate::bounds::{outer_extent, Extent3, Obb};
    pub use crate::ray::Ray;
    pub use crate::bits::{ilog10, BitOps};
    pub use crate::error::{MathError, Result};
    pub use crate::scalar::{clamp, degrees, lerp, radians, smootherstep, smoothstep};
}
