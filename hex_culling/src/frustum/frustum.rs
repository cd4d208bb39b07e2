/// Frustum: six clipping planes for visibility culling.
///
/// Planes are extracted from a view-projection matrix with the Gribb &
/// Hartmann method, using the OpenGL clip-space convention
/// (`-w <= x, y, z <= w`). Build projections with glam's `*_gl` variants.
///
/// A frustum remembers the matrix it was built from: `update_frustum` with
/// an unchanged matrix does nothing. A new frustum starts dirty and must be
/// updated before culling.

use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::cull_bail;
use super::plane::Plane;
use super::batch::{SphereBatchTester, WideSphereTester};

/// Result of a 3-way frustum classification.
///
/// - `Outside` → no intersection, safe to discard
/// - `Inside` → fully contained, accept without further testing
/// - `Intersect` → straddles the boundary, refine or accept conservatively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullResult {
    #[default]
    Outside,
    Inside,
    Intersect,
}

impl CullResult {
    /// `Inside` or `Intersect`.
    #[inline]
    pub fn is_visible(self) -> bool {
        self != CullResult::Outside
    }
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Plane names, indexed by the `PLANE_*` constants.
pub const PLANE_NAMES: [&str; 6] = ["left", "right", "bottom", "top", "near", "far"];

/// Six frustum planes plus the matrix they were extracted from.
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    planes: [Plane; 6],
    /// View-projection matrix of the last extraction
    matrix: Mat4,
    /// Planes not yet computed (or last extraction was degenerate)
    dirty: bool,
    /// Number of plane extractions performed
    extraction_count: u64,
}

impl Default for Frustum {
    fn default() -> Self {
        Self::new()
    }
}

impl Frustum {
    /// Create a dirty frustum with all-zero planes.
    pub fn new() -> Self {
        Self {
            planes: [Plane::ZERO; 6],
            matrix: Mat4::ZERO,
            dirty: true,
            extraction_count: 0,
        }
    }

    /// Build a frustum from a view-projection matrix.
    ///
    /// A degenerate matrix is logged and leaves the frustum dirty: it stays
    /// unusable (every culler returns nothing) until a successful
    /// `update_frustum`. Call `update_frustum` directly to get the error.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let mut frustum = Self::new();
        let _ = frustum.update_frustum(vp);
        frustum
    }

    /// Refresh the planes from `vp`.
    ///
    /// No-op when `vp` equals the cached matrix and the frustum is clean.
    ///
    /// # Errors
    ///
    /// `Error::DegenerateFrustum` if any extracted plane has a zero-length
    /// normal. The planes are still stored (un-normalized for that plane)
    /// but the frustum stays dirty, so cullers treat it as unusable.
    pub fn update_frustum(&mut self, vp: &Mat4) -> Result<()> {
        if !self.dirty && self.matrix == *vp {
            return Ok(());
        }

        self.matrix = *vp;
        self.extraction_count += 1;

        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        let raw = [
            row3 + row0, // left
            row3 - row0, // right
            row3 + row1, // bottom
            row3 - row1, // top
            row3 + row2, // near
            row3 - row2, // far
        ];

        let mut degenerate = None;
        for (index, coefficients) in raw.into_iter().enumerate() {
            let plane = Plane::from_coefficients(coefficients);
            if degenerate.is_none() && plane.is_degenerate() {
                degenerate = Some(index);
            }
            self.planes[index] = plane.normalized();
        }

        if let Some(index) = degenerate {
            self.dirty = true;
            cull_bail!("hexcull::Frustum", DegenerateFrustum,
                "{} plane has a zero-length normal", PLANE_NAMES[index]);
        }

        self.dirty = false;
        Ok(())
    }

    /// Force the next `update_frustum` to re-extract.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// True until a successful extraction.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of extractions performed so far.
    pub fn extraction_count(&self) -> u64 {
        self.extraction_count
    }

    /// View-projection matrix of the last extraction.
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Plane at one of the `PLANE_*` indices.
    pub fn plane(&self, index: usize) -> &Plane {
        &self.planes[index]
    }

    // ===== CLASSIFICATION =====

    /// Classify a point: `Outside` if behind any plane, else `Inside`.
    pub fn test_point(&self, point: Vec3) -> CullResult {
        for plane in &self.planes {
            if plane.distance_to_point(point) < 0.0 {
                return CullResult::Outside;
            }
        }
        CullResult::Inside
    }

    /// Classify a sphere.
    ///
    /// Only `Outside` returns early; an intersecting plane keeps scanning
    /// because a later plane may still reject the sphere.
    #[inline]
    pub fn test_sphere(&self, center: Vec3, radius: f32) -> CullResult {
        classify_sphere(&self.planes, center, radius)
    }

    /// Classify an axis-aligned box with the positive/negative vertex test.
    pub fn test_aabb(&self, min: Vec3, max: Vec3) -> CullResult {
        let mut result = CullResult::Inside;

        for plane in &self.planes {
            let normal = plane.normal;

            // Corner most aligned with the normal
            let p_vertex = Vec3::new(
                if normal.x >= 0.0 { max.x } else { min.x },
                if normal.y >= 0.0 { max.y } else { min.y },
                if normal.z >= 0.0 { max.z } else { min.z },
            );
            if plane.distance_to_point(p_vertex) < 0.0 {
                return CullResult::Outside;
            }

            // Opposite corner
            let n_vertex = Vec3::new(
                if normal.x >= 0.0 { min.x } else { max.x },
                if normal.y >= 0.0 { min.y } else { max.y },
                if normal.z >= 0.0 { min.z } else { max.z },
            );
            if plane.distance_to_point(n_vertex) < 0.0 {
                result = CullResult::Intersect;
            }
        }

        result
    }

    // ===== BATCHED CLASSIFICATION =====

    /// Classify many spheres sharing one radius.
    ///
    /// `results` is cleared and refilled with one entry per center, in
    /// order. Identical to calling `test_sphere` per element.
    pub fn batch_test_spheres(&self, centers: &[Vec3], radius: f32, results: &mut Vec<CullResult>) {
        self.batch_test_spheres_with(&WideSphereTester, centers, radius, results);
    }

    /// `batch_test_spheres` with an explicit strategy.
    pub fn batch_test_spheres_with(
        &self,
        tester: &dyn SphereBatchTester,
        centers: &[Vec3],
        radius: f32,
        results: &mut Vec<CullResult>,
    ) {
        results.clear();
        results.resize(centers.len(), CullResult::Outside);
        tester.test_shared(&self.planes, centers, radius, results);
    }

    /// Classify many spheres with one radius each.
    ///
    /// If `radii` and `centers` differ in length, `results` is sized to
    /// `centers` but no test runs and its contents are meaningless.
    pub fn batch_test_spheres_radii(
        &self,
        centers: &[Vec3],
        radii: &[f32],
        results: &mut Vec<CullResult>,
    ) {
        results.clear();
        results.resize(centers.len(), CullResult::Outside);

        if radii.len() != centers.len() {
            crate::cull_warn!("hexcull::Frustum",
                "batch_test_spheres_radii: {} centers but {} radii, skipping",
                centers.len(), radii.len());
            return;
        }

        WideSphereTester.test_radii(&self.planes, centers, radii, results);
    }
}

/// Scalar sphere classification shared by `Frustum::test_sphere` and the
/// batch testers.
#[inline]
pub(crate) fn classify_sphere(planes: &[Plane; 6], center: Vec3, radius: f32) -> CullResult {
    let mut result = CullResult::Inside;

    for plane in planes {
        let distance = plane.distance_to_point(center);
        if distance < -radius {
            return CullResult::Outside;
        }
        if distance < radius {
            result = CullResult::Intersect;
        }
    }

    result
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
