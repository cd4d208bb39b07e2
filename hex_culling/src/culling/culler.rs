/// Tile culling strategies.
///
/// A TileCuller determines which tiles of a `SpatialIndex` are visible
/// through a `Frustum`. `HierarchicalCuller` is the production path;
/// `BruteForceCuller` tests every tile and serves as a baseline.
///
/// Both return an empty result for a stale index or a dirty frustum.

use rdst::RadixSort;
use crate::frustum::{CullResult, Frustum, SphereBatchTester, WideSphereTester};
use crate::spatial::{Bucket, Level, SpatialIndex};
use crate::cull_trace;
use super::culling_result::{CullingResult, CullingStats};

/// Tile bounding-sphere radius as a fraction of the hex radius.
///
/// Approximates the hex footprint by its inscribed circle.
pub const TILE_BOUNDING_FACTOR: f32 = 0.6;

/// Strategy for determining visible tiles.
///
/// Called once or more per frame. `&mut self` lets implementations keep
/// scratch buffers and statistics between calls.
pub trait TileCuller: Send {
    /// Cull into `result`, which is cleared first.
    fn cull_into(&mut self, index: &SpatialIndex, frustum: &Frustum, result: &mut CullingResult);

    /// Cull into a fresh result.
    fn cull(&mut self, index: &SpatialIndex, frustum: &Frustum) -> CullingResult {
        let mut result = CullingResult::new();
        self.cull_into(index, frustum, &mut result);
        result
    }

    /// Counters of the last call.
    fn last_stats(&self) -> CullingStats;
}

/// Classify each tile of `bucket` individually and route it.
fn classify_tiles(
    frustum: &Frustum,
    tester: &dyn SphereBatchTester,
    bucket: &Bucket,
    tile_radius: f32,
    scratch: &mut Vec<CullResult>,
    result: &mut CullingResult,
    stats: &mut CullingStats,
) {
    frustum.batch_test_spheres_with(tester, bucket.positions(), tile_radius, scratch);

    for (tile, classification) in bucket.tiles().iter().zip(scratch.iter()) {
        stats.tiles_tested += 1;
        match classification {
            CullResult::Inside => result.push_visible(*tile),
            CullResult::Intersect => result.push_intersecting(*tile),
            CullResult::Outside => stats.tiles_culled += 1,
        }
    }
}

/// Fill `keys` with the bucket keys of `level` in ascending order.
fn sorted_keys(level: &Level, keys: &mut Vec<u64>) {
    keys.clear();
    keys.extend(level.buckets().keys().copied());
    keys.radix_sort_unstable();
}

/// Whether the inputs can be culled; a query on unusable inputs yields nothing.
fn ready(index: &SpatialIndex, frustum: &Frustum, source: &str) -> bool {
    if frustum.is_dirty() {
        cull_trace!(source, "Frustum is dirty, culling nothing");
        return false;
    }
    if !index.is_ready() {
        cull_trace!(source, "Spatial index is stale, culling nothing");
        return false;
    }
    true
}

// ===== HIERARCHICAL =====

/// Two-pass coarse-to-fine culler.
///
/// 1. Coarse: classify the bounding sphere of every non-empty bucket of
///    the coarsest level. `Outside` buckets are dropped whole, `Inside`
///    buckets are accepted whole, `Intersect` buckets are queued.
/// 2. Fine: classify every tile of the queued buckets with a sphere of
///    `hex_radius * TILE_BOUNDING_FACTOR`.
///
/// Coarse buckets are visited in ascending key order so output order is
/// stable from frame to frame.
pub struct HierarchicalCuller {
    tester: Box<dyn SphereBatchTester>,
    stats: CullingStats,
    coarse_keys: Vec<u64>,
    queued: Vec<u64>,
    scratch: Vec<CullResult>,
}

impl Default for HierarchicalCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchicalCuller {
    pub fn new() -> Self {
        Self::with_tester(WideSphereTester)
    }

    /// Use a specific batch strategy for the fine pass.
    pub fn with_tester<T: SphereBatchTester + 'static>(tester: T) -> Self {
        Self {
            tester: Box::new(tester),
            stats: CullingStats::default(),
            coarse_keys: Vec::new(),
            queued: Vec::new(),
            scratch: Vec::new(),
        }
    }
}

impl TileCuller for HierarchicalCuller {
    fn cull_into(&mut self, index: &SpatialIndex, frustum: &Frustum, result: &mut CullingResult) {
        result.clear();
        self.stats = CullingStats::default();
        self.queued.clear();

        if !ready(index, frustum, "hexcull::HierarchicalCuller") {
            return;
        }
        let Some(coarse) = index.coarsest_level() else {
            return;
        };

        // Coarse pass
        sorted_keys(coarse, &mut self.coarse_keys);
        for &key in &self.coarse_keys {
            let Some(bucket) = coarse.bucket(key) else {
                continue;
            };
            if bucket.is_empty() {
                continue;
            }

            self.stats.buckets_tested += 1;
            match frustum.test_sphere(bucket.center(), bucket.radius()) {
                CullResult::Outside => self.stats.tiles_culled += bucket.len(),
                CullResult::Inside => {
                    result.extend_visible(bucket.tiles());
                    self.stats.tiles_tested += bucket.len();
                }
                CullResult::Intersect => self.queued.push(key),
            }
        }

        // Fine pass
        let tile_radius = index.hex_radius() * TILE_BOUNDING_FACTOR;
        for &key in &self.queued {
            if let Some(bucket) = coarse.bucket(key) {
                classify_tiles(
                    frustum,
                    self.tester.as_ref(),
                    bucket,
                    tile_radius,
                    &mut self.scratch,
                    result,
                    &mut self.stats,
                );
            }
        }

        result.set_totals(&self.stats);

        cull_trace!("hexcull::HierarchicalCuller",
            "{} buckets ({} refined), {} tested, {} culled, {} visible + {} intersecting",
            self.stats.buckets_tested, self.queued.len(),
            self.stats.tiles_tested, self.stats.tiles_culled,
            result.visible_tiles().len(), result.intersecting_tiles().len());
    }

    fn last_stats(&self) -> CullingStats {
        self.stats
    }
}

// ===== BRUTE FORCE =====

/// Classifies every tile of the finest level individually.
///
/// O(tiles) per call. Useful as a reference for the hierarchical culler.
pub struct BruteForceCuller {
    stats: CullingStats,
    keys: Vec<u64>,
    scratch: Vec<CullResult>,
}

impl Default for BruteForceCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl BruteForceCuller {
    pub fn new() -> Self {
        Self {
            stats: CullingStats::default(),
            keys: Vec::new(),
            scratch: Vec::new(),
        }
    }
}

impl TileCuller for BruteForceCuller {
    fn cull_into(&mut self, index: &SpatialIndex, frustum: &Frustum, result: &mut CullingResult) {
        result.clear();
        self.stats = CullingStats::default();

        if !ready(index, frustum, "hexcull::BruteForceCuller") {
            return;
        }
        let Some(finest) = index.finest_level() else {
            return;
        };

        let tile_radius = index.hex_radius() * TILE_BOUNDING_FACTOR;
        sorted_keys(finest, &mut self.keys);
        for &key in &self.keys {
            if let Some(bucket) = finest.bucket(key) {
                classify_tiles(
                    frustum,
                    &WideSphereTester,
                    bucket,
                    tile_radius,
                    &mut self.scratch,
                    result,
                    &mut self.stats,
                );
            }
        }

        result.set_totals(&self.stats);
    }

    fn last_stats(&self) -> CullingStats {
        self.stats
    }
}

// ===== SPATIAL INDEX SHORTCUT =====

impl SpatialIndex {
    /// One-off hierarchical frustum query.
    ///
    /// Allocates scratch space on every call; per-frame callers should keep
    /// a `HierarchicalCuller` instead.
    pub fn query_frustum(&self, frustum: &Frustum) -> CullingResult {
        HierarchicalCuller::new().cull(self, frustum)
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
