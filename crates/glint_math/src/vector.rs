//! Free-standing vector operations used by the camera and the shading model.

use crate::Vec3;

/// Minimum accepted ray parameter for an intersection.
///
/// Hits closer to the ray origin than this are discarded to avoid
/// self-intersection at the origin.
pub const EPSILON: f32 = 0.0001;

/// Scale `v` to unit length.
///
/// A zero-length vector is not guarded: the result has NaN or infinite
/// components, which then propagate through any computation using it.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v / v.length()
}

/// Reflect `v` about the normal `n`.
///
/// `n` is expected to be unit length.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * (2.0 * v.dot(n))
}
