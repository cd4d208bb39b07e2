use glam::{Mat4, Vec3};
use rustc_hash::FxHashSet;
use slotmap::SlotMap;
use super::*;
use crate::config::SpatialIndexConfig;
use crate::frustum::ScalarSphereTester;
use crate::hex::{HexCoord, TileKey, TileRef};

fn make_world(range: u32) -> Vec<TileRef> {
    let mut storage = SlotMap::<TileKey, HexCoord>::with_key();
    HexCoord::ORIGIN
        .spiral(range)
        .map(|coord| TileRef::new(storage.insert(coord), coord))
        .collect()
}

/// Bucket sizes 4, 8, 16 on a unit-radius grid.
fn built_index(tiles: &[TileRef]) -> SpatialIndex {
    let config = SpatialIndexConfig {
        hex_radius: 1.0,
        base_bucket_size: 4,
        level_count: 3,
        growth_factor: 2,
    };
    let mut index = SpatialIndex::new(config).unwrap();
    index.rebuild(tiles);
    index
}

/// Top-down orthographic view of the square `[cx - half, cx + half] x [-half, half]`.
fn top_down_frustum(center_x: f32, half_extent: f32) -> Frustum {
    let eye = Vec3::new(center_x, 100.0, 0.0);
    let view = Mat4::look_at_rh(eye, Vec3::new(center_x, 0.0, 0.0), Vec3::NEG_Z);
    let projection = Mat4::orthographic_rh_gl(
        -half_extent, half_extent,
        -half_extent, half_extent,
        1.0, 200.0,
    );
    Frustum::from_view_projection(&(projection * view))
}

/// Oblique perspective view covering part of the world.
fn partial_frustum() -> Frustum {
    let projection = Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_3, 1.0, 0.1, 200.0);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 30.0, 40.0), Vec3::ZERO, Vec3::Y);
    Frustum::from_view_projection(&(projection * view))
}

fn keys(tiles: &[TileRef]) -> FxHashSet<TileKey> {
    tiles.iter().map(|t| t.key).collect()
}

fn all_keys(result: &CullingResult) -> FxHashSet<TileKey> {
    result.iter_all().map(|t| t.key).collect()
}

// ============================================================================
// Whole-world and empty views
// ============================================================================

#[test]
fn test_frustum_covering_world_returns_every_tile() {
    let tiles = make_world(20);
    let index = built_index(&tiles);
    let frustum = top_down_frustum(0.0, 60.0);

    let mut culler = HierarchicalCuller::new();
    let result = culler.cull(&index, &frustum);

    assert_eq!(result.total_visible(), tiles.len());
    assert_eq!(all_keys(&result), keys(&tiles));
    assert_eq!(result.total_culled(), 0);
    assert_eq!(result.total_tested(), tiles.len());
    // Every coarse bucket is fully inside: no tile needed its own test.
    assert!(result.intersecting_tiles().is_empty());
    assert_eq!(
        culler.last_stats().buckets_tested,
        index.coarsest_level().unwrap().bucket_count(),
    );
}

#[test]
fn test_frustum_covering_nothing_culls_everything() {
    let tiles = make_world(20);
    let index = built_index(&tiles);
    let frustum = top_down_frustum(10_000.0, 60.0);

    let mut culler = HierarchicalCuller::new();
    let result = culler.cull(&index, &frustum);

    assert!(result.is_empty());
    assert!(result.visible_tiles().is_empty());
    assert!(result.intersecting_tiles().is_empty());
    assert_eq!(result.total_culled(), tiles.len());
    assert_eq!(result.total_tested(), 0);
}

// ============================================================================
// Partial views
// ============================================================================

#[test]
fn test_partial_view_splits_world() {
    let tiles = make_world(30);
    let index = built_index(&tiles);
    let frustum = partial_frustum();

    let mut culler = HierarchicalCuller::new();
    let result = culler.cull(&index, &frustum);

    assert!(result.total_visible() > 0);
    assert!(result.total_culled() > 0);
    assert!(!result.intersecting_tiles().is_empty());

    // No tile is emitted twice.
    let emitted = all_keys(&result);
    assert_eq!(emitted.len(), result.total_visible());
}

#[test]
fn test_hierarchical_agrees_with_brute_force() {
    let tiles = make_world(30);
    let index = built_index(&tiles);
    let frustum = partial_frustum();

    let hierarchical = HierarchicalCuller::new().cull(&index, &frustum);
    let brute = BruteForceCuller::new().cull(&index, &frustum);

    let brute_inside = keys(brute.visible_tiles());
    let brute_all = all_keys(&brute);
    let hier_all = all_keys(&hierarchical);

    // Tiles proven inside are never lost; nothing provably outside is drawn.
    assert!(brute_inside.is_subset(&hier_all));
    assert!(hier_all.is_subset(&brute_all));
    assert_eq!(brute.total_tested(), tiles.len());
}

#[test]
fn test_brute_force_visits_every_tile() {
    let tiles = make_world(10);
    let index = built_index(&tiles);
    let frustum = top_down_frustum(0.0, 60.0);

    let mut culler = BruteForceCuller::new();
    let result = culler.cull(&index, &frustum);

    assert_eq!(result.total_visible(), tiles.len());
    assert_eq!(culler.last_stats().tiles_tested, tiles.len());
    assert_eq!(culler.last_stats().buckets_tested, 0);
}

#[test]
fn test_output_order_is_stable() {
    let tiles = make_world(25);
    let index = built_index(&tiles);
    let frustum = partial_frustum();

    let mut culler = HierarchicalCuller::new();
    let first = culler.cull(&index, &frustum);
    let second = culler.cull(&index, &frustum);

    assert_eq!(first.visible_tiles(), second.visible_tiles());
    assert_eq!(first.intersecting_tiles(), second.intersecting_tiles());
}

#[test]
fn test_batch_strategy_does_not_change_result() {
    let tiles = make_world(25);
    let index = built_index(&tiles);
    let frustum = partial_frustum();

    let wide = HierarchicalCuller::new().cull(&index, &frustum);
    let scalar = HierarchicalCuller::with_tester(ScalarSphereTester).cull(&index, &frustum);

    assert_eq!(wide.visible_tiles(), scalar.visible_tiles());
    assert_eq!(wide.intersecting_tiles(), scalar.intersecting_tiles());
    assert_eq!(wide.total_culled(), scalar.total_culled());
}

#[test]
fn test_result_buffer_reuse_resets_counters() {
    let tiles = make_world(15);
    let index = built_index(&tiles);

    let mut culler = HierarchicalCuller::new();
    let mut result = CullingResult::new();
    culler.cull_into(&index, &top_down_frustum(0.0, 60.0), &mut result);
    assert_eq!(result.total_visible(), tiles.len());

    culler.cull_into(&index, &top_down_frustum(10_000.0, 60.0), &mut result);
    assert!(result.is_empty());
    assert_eq!(result.total_culled(), tiles.len());
    assert_eq!(result.total_tested(), 0);
}

// ============================================================================
// Stale inputs
// ============================================================================

#[test]
fn test_cull_before_rebuild_is_empty() {
    let index = SpatialIndex::default();
    let frustum = top_down_frustum(0.0, 60.0);

    let mut culler = HierarchicalCuller::new();
    let result = culler.cull(&index, &frustum);

    assert!(result.is_empty());
    assert_eq!(result.total_tested(), 0);
    assert_eq!(result.total_culled(), 0);
    assert_eq!(culler.last_stats(), CullingStats::default());
}

#[test]
fn test_cull_after_invalidate_is_empty() {
    let tiles = make_world(5);
    let mut index = built_index(&tiles);
    index.invalidate();

    let result = HierarchicalCuller::new().cull(&index, &top_down_frustum(0.0, 60.0));
    assert!(result.is_empty());
}

#[test]
fn test_cull_with_dirty_frustum_is_empty() {
    let tiles = make_world(5);
    let index = built_index(&tiles);

    let result = HierarchicalCuller::new().cull(&index, &Frustum::new());
    assert!(result.is_empty());

    let brute = BruteForceCuller::new().cull(&index, &Frustum::new());
    assert!(brute.is_empty());
}

#[test]
fn test_cull_with_degenerate_frustum_is_empty() {
    let tiles = make_world(5);
    let index = built_index(&tiles);
    let frustum = Frustum::from_view_projection(&Mat4::ZERO);

    assert!(HierarchicalCuller::new().cull(&index, &frustum).is_empty());
    assert!(index.query_frustum(&frustum).is_empty());
}

// ============================================================================
// SpatialIndex::query_frustum
// ============================================================================

#[test]
fn test_query_frustum_shortcut() {
    let tiles = make_world(12);
    let index = built_index(&tiles);

    let result = index.query_frustum(&top_down_frustum(0.0, 60.0));
    assert_eq!(all_keys(&result), keys(&tiles));

    let stale = SpatialIndex::default().query_frustum(&top_down_frustum(0.0, 60.0));
    assert!(stale.is_empty());
}
