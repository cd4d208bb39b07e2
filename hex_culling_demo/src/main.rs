//! Orbiting-camera demo
//!
//! Builds a hexagonal world, orbits a perspective camera around it and
//! logs what the hierarchical culler keeps each frame, next to the
//! brute-force baseline.

use std::time::Instant;

use glam::{Mat4, Vec3};
use hex_culling::hexcull::log::{self, LogSeverity};
use hex_culling::hexcull::{
    BruteForceCuller, CullingResult, Frustum, HexCoord, HierarchicalCuller, Result,
    SpatialIndex, SpatialIndexConfig, TileCuller, TileKey, TileRef,
};
use hex_culling::{cull_debug, cull_info};
use slotmap::SlotMap;

const WORLD_RANGE: u32 = 200;
const FRAMES: u32 = 16;
const ORBIT_RADIUS: f32 = 120.0;
const CAMERA_HEIGHT: f32 = 60.0;

fn main() -> Result<()> {
    log::set_min_severity(LogSeverity::Debug);

    let mut storage = SlotMap::<TileKey, HexCoord>::with_key();
    let tiles: Vec<TileRef> = HexCoord::ORIGIN
        .spiral(WORLD_RANGE)
        .map(|coord| TileRef::new(storage.insert(coord), coord))
        .collect();

    let started = Instant::now();
    let mut index = SpatialIndex::new(SpatialIndexConfig::default())?;
    index.rebuild(&tiles);
    cull_info!("demo", "Indexed {} tiles in {:?}", index.tile_count(), started.elapsed());

    let projection = Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_3, 16.0 / 9.0, 0.1, 400.0);
    let mut frustum = Frustum::new();
    let mut hierarchical = HierarchicalCuller::new();
    let mut brute_force = BruteForceCuller::new();
    let mut result = CullingResult::new();

    for frame in 0..FRAMES {
        let angle = frame as f32 / FRAMES as f32 * std::f32::consts::TAU;
        let eye = Vec3::new(angle.cos() * ORBIT_RADIUS, CAMERA_HEIGHT, angle.sin() * ORBIT_RADIUS);
        let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
        frustum.update_frustum(&(projection * view))?;

        let started = Instant::now();
        hierarchical.cull_into(&index, &frustum, &mut result);
        let hierarchical_time = started.elapsed();
        let stats = hierarchical.last_stats();

        let started = Instant::now();
        let baseline = brute_force.cull(&index, &frustum);
        let brute_force_time = started.elapsed();

        cull_info!("demo", "Frame {:2}: {} visible ({} intersecting), {} culled in {:?}",
            frame, result.total_visible(), result.intersecting_tiles().len(),
            result.total_culled(), hierarchical_time);
        cull_debug!("demo", "Frame {:2}: {} buckets, {} tiles tested; brute force {} visible in {:?}",
            frame, stats.buckets_tested, stats.tiles_tested,
            baseline.total_visible(), brute_force_time);
    }

    Ok(())
}
