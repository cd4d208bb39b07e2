/// Plane: one half-space boundary of the frustum.
///
/// Stored as a normal and a signed distance term such that
/// `dot(normal, p) + distance == 0` for points on the plane. Points with a
/// positive value lie in front of the plane, inside the visible half-space.

use glam::{Vec3, Vec4};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Inward-pointing normal (unit length after normalization)
    pub normal: Vec3,
    /// Signed distance term
    pub distance: f32,
}

impl Default for Plane {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Plane {
    /// All-zero plane; every point is "on" it.
    pub const ZERO: Plane = Plane { normal: Vec3::ZERO, distance: 0.0 };

    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Build from raw `(A, B, C, D)` coefficients, without normalizing.
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        Self {
            normal: coefficients.truncate(),
            distance: coefficients.w,
        }
    }

    /// Scale the plane so its normal is unit length.
    ///
    /// A zero-length normal is left untouched.
    pub fn normalized(self) -> Self {
        let len = self.normal.length();
        if len > 0.0 {
            Self {
                normal: self.normal / len,
                distance: self.distance / len,
            }
        } else {
            self
        }
    }

    /// True when the normal is too short to define a half-space.
    pub fn is_degenerate(&self) -> bool {
        self.normal.length() < f32::EPSILON
    }

    /// Signed distance from `point` to the plane (Euclidean once normalized).
    ///
    /// Evaluated as `((nx*px + ny*py) + nz*pz) + d`. The wide batch tester
    /// relies on this exact operation order.
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.x * point.x + self.normal.y * point.y + self.normal.z * point.z + self.distance
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
