/// Batched sphere classification strategies.
///
/// Both testers produce exactly the results of `Frustum::test_sphere` for
/// every element. `WideSphereTester` evaluates four spheres per plane with
/// `glam::Vec4` lanes, using the same per-lane operation order as
/// `Plane::distance_to_point`, so results are bit-identical.

use glam::{Vec3, Vec4};
use super::frustum::{classify_sphere, CullResult};
use super::plane::Plane;

/// Strategy for classifying many spheres against six planes.
///
/// Callers guarantee `results.len() == centers.len()` (and
/// `radii.len() == centers.len()` for `test_radii`).
pub trait SphereBatchTester: Send + Sync {
    /// Spheres sharing one radius.
    fn test_shared(&self, planes: &[Plane; 6], centers: &[Vec3], radius: f32, results: &mut [CullResult]);

    /// One radius per sphere.
    fn test_radii(&self, planes: &[Plane; 6], centers: &[Vec3], radii: &[f32], results: &mut [CullResult]);
}

/// One scalar test per sphere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarSphereTester;

impl SphereBatchTester for ScalarSphereTester {
    fn test_shared(&self, planes: &[Plane; 6], centers: &[Vec3], radius: f32, results: &mut [CullResult]) {
        for (center, result) in centers.iter().zip(results.iter_mut()) {
            *result = classify_sphere(planes, *center, radius);
        }
    }

    fn test_radii(&self, planes: &[Plane; 6], centers: &[Vec3], radii: &[f32], results: &mut [CullResult]) {
        for ((center, radius), result) in centers.iter().zip(radii).zip(results.iter_mut()) {
            *result = classify_sphere(planes, *center, *radius);
        }
    }
}

/// Four spheres per step; the tail falls back to the scalar path.
#[derive(Debug, Clone, Copy, Default)]
pub struct WideSphereTester;

const LANES: usize = 4;

impl WideSphereTester {
    /// Classify one group of four spheres.
    fn classify_group(planes: &[Plane; 6], centers: &[Vec3], radii: Vec4) -> [CullResult; LANES] {
        let xs = Vec4::new(centers[0].x, centers[1].x, centers[2].x, centers[3].x);
        let ys = Vec4::new(centers[0].y, centers[1].y, centers[2].y, centers[3].y);
        let zs = Vec4::new(centers[0].z, centers[1].z, centers[2].z, centers[3].z);
        let neg_radii = -radii;

        let mut outside = 0u32;
        let mut intersect = 0u32;

        for plane in planes {
            let n = plane.normal;
            let distances = xs * n.x + ys * n.y + zs * n.z + plane.distance;

            outside |= distances.cmplt(neg_radii).bitmask();
            intersect |= distances.cmplt(radii).bitmask();

            if outside == 0b1111 {
                break;
            }
        }

        let mut results = [CullResult::Inside; LANES];
        for (lane, result) in results.iter_mut().enumerate() {
            let bit = 1 << lane;
            *result = if outside & bit != 0 {
                CullResult::Outside
            } else if intersect & bit != 0 {
                CullResult::Intersect
            } else {
                CullResult::Inside
            };
        }
        results
    }
}

impl SphereBatchTester for WideSphereTester {
    fn test_shared(&self, planes: &[Plane; 6], centers: &[Vec3], radius: f32, results: &mut [CullResult]) {
        let radii = Vec4::splat(radius);
        let mut groups = centers.chunks_exact(LANES);
        let mut outputs = results.chunks_exact_mut(LANES);

        for (group, output) in (&mut groups).zip(&mut outputs) {
            output.copy_from_slice(&Self::classify_group(planes, group, radii));
        }

        let tail = groups.remainder();
        let tail_out = outputs.into_remainder();
        ScalarSphereTester.test_shared(planes, tail, radius, tail_out);
    }

    fn test_radii(&self, planes: &[Plane; 6], centers: &[Vec3], radii: &[f32], results: &mut [CullResult]) {
        let mut groups = centers.chunks_exact(LANES);
        let mut radius_groups = radii.chunks_exact(LANES);
        let mut outputs = results.chunks_exact_mut(LANES);

        for ((group, r), output) in (&mut groups).zip(&mut radius_groups).zip(&mut outputs) {
            let radii4 = Vec4::from_slice(r);
            output.copy_from_slice(&Self::classify_group(planes, group, radii4));
        }

        ScalarSphereTester.test_radii(
            planes,
            groups.remainder(),
            radius_groups.remainder(),
            outputs.into_remainder(),
        );
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
