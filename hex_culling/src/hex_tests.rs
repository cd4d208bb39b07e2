use super::*;
use slotmap::SlotMap;

// ============================================================================
// HexCoord
// ============================================================================

#[test]
fn test_origin_maps_to_world_origin() {
    assert_eq!(HexCoord::ORIGIN.to_world(1.0), Vec3::ZERO);
}

#[test]
fn test_axial_to_world_conversion() {
    let p = HexCoord::new(2, 0).to_world(1.0);
    assert!((p.x - 3.0).abs() < 1e-6);
    assert_eq!(p.y, 0.0);
    assert!((p.z - SQRT_3).abs() < 1e-6);

    let p = HexCoord::new(0, 1).to_world(2.0);
    assert_eq!(p.x, 0.0);
    assert!((p.z - 2.0 * SQRT_3).abs() < 1e-6);
}

#[test]
fn test_world_position_scales_with_radius() {
    let coord = HexCoord::new(-3, 5);
    let unit = coord.to_world(1.0);
    let scaled = coord.to_world(2.5);
    assert!((scaled - unit * 2.5).length() < 1e-4);
}

#[test]
fn test_cube_component() {
    let coord = HexCoord::new(3, -5);
    assert_eq!(coord.s(), 2);
    assert_eq!(HexCoord::from_cube(3, -5, 2), Some(coord));
    assert_eq!(HexCoord::from_cube(1, 1, 1), None);
}

#[test]
fn test_distance() {
    let a = HexCoord::new(0, 0);
    let b = HexCoord::new(2, -1);
    assert_eq!(a.distance(&b), 2);
    assert_eq!(b.distance(&a), 2);
    assert_eq!(a.distance(&a), 0);
}

#[test]
fn test_spiral_cell_count() {
    // 1 + 3 * n * (n + 1) cells within range n
    assert_eq!(HexCoord::ORIGIN.spiral(0).count(), 1);
    assert_eq!(HexCoord::ORIGIN.spiral(1).count(), 7);
    assert_eq!(HexCoord::ORIGIN.spiral(4).count(), 61);

    let center = HexCoord::new(5, -2);
    assert!(center.spiral(3).all(|c| c.distance(&center) <= 3));
}

// ============================================================================
// TileRef
// ============================================================================

#[test]
fn test_tile_ref_position_matches_coord() {
    let mut tiles = SlotMap::<TileKey, ()>::with_key();
    let key = tiles.insert(());
    let tile = TileRef::new(key, HexCoord::new(4, 1));
    assert_eq!(tile.world_position(1.5), HexCoord::new(4, 1).to_world(1.5));
}
